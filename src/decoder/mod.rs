//! Decode orchestration: image loading, luminance, reader invocation.
//!
//! Luminance, binarization and symbol search all belong to `rxing`; this
//! module only loads the image and packages what comes back.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use rxing::common::HybridBinarizer;
use rxing::{BinaryBitmap, BufferedImageLuminanceSource, MultiFormatReader, Reader};

use crate::error::{QrError, Result};
use crate::models::{DecodeResult, Symbology};

/// Decode the first barcode found in the image at `path`
pub fn decode(path: impl AsRef<Path>) -> Result<DecodeResult> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| QrError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    decode_image(&image)
}

/// Decode the first barcode found in encoded image bytes (PNG, JPEG)
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodeResult> {
    let image = image::load_from_memory(bytes).map_err(|source| QrError::Read {
        path: PathBuf::new(),
        source,
    })?;
    decode_image(&image)
}

/// Decode the first barcode found in an already loaded image
pub fn decode_image(image: &DynamicImage) -> Result<DecodeResult> {
    if image.width() == 0 || image.height() == 0 {
        return Err(QrError::NotFound("image has no pixels".to_string()));
    }

    let source = BufferedImageLuminanceSource::new(image.clone());
    let mut bitmap = BinaryBitmap::new(HybridBinarizer::new(source));
    let mut reader = MultiFormatReader::default();

    let found = reader
        .decode(&mut bitmap)
        .map_err(|err| QrError::NotFound(err.to_string()))?;

    let format = Symbology::from(found.getBarcodeFormat());
    log::debug!("decoded {} symbol ({} chars)", format, found.getText().chars().count());
    Ok(DecodeResult::new(found.getText().to_string(), format))
}
