//! qr_util - QR code image generation and barcode image reading
//!
//! Encodes text into QR-code PNG/JPEG images (written to disk or returned as
//! bytes) and decodes barcode images back into text plus their symbology.
//! Symbol construction is delegated to `qrcode`; luminance, binarization and
//! symbol reading to `rxing`; this crate handles hints, output paths, rendering and errors.
//!
//! ```no_run
//! use qr_util::{ImageFormat, decode, encode};
//!
//! let outcome = encode("hello", 300, 300, "out/hello.png", Some(ImageFormat::Png))?;
//! let result = decode(&outcome.path)?;
//! assert_eq!(result.text(), "hello");
//! # Ok::<(), qr_util::QrError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoder hints and defaults
pub mod config;
/// Barcode reading (luminance, binarization, multi-format search)
pub mod decoder;
/// QR generation (symbol, rendering, output paths, raster)
pub mod encoder;
/// Error type
pub mod error;
/// Core data structures (BitMatrix, ImageFormat, DecodeResult, etc.)
pub mod models;

pub use config::{CharacterSet, DEFAULT_JPEG_QUALITY, DEFAULT_MARGIN, DEFAULT_QRCODE_SIZE, EncodeHints};
pub use decoder::{decode, decode_bytes, decode_image};
pub use encoder::{
    EncodeOutcome, EncodeWarning, QrEncoder, encode, encode_default, encode_matrix, encode_named,
    encode_sized, encode_to_bytes, encode_to_bytes_with_hints, encode_with_hints,
};
pub use error::{ErrorKind, QrError, Result};
pub use models::{BitMatrix, DecodeResult, ECLevel, ImageFormat, Symbology};
