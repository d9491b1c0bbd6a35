pub mod format;
pub mod matrix;
pub mod qr_code;

pub use format::ImageFormat;
pub use matrix::BitMatrix;
pub use qr_code::{DecodeResult, ECLevel, Symbology};
