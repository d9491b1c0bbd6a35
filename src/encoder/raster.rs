//! Bit matrix to raster bytes.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, Luma};

use crate::error::{QrError, Result};
use crate::models::{BitMatrix, ImageFormat};

/// Luma of a dark module (ARGB 0xFF000000)
pub const ON_LUMA: u8 = 0x00;
/// Luma of a light module (ARGB 0xFFFFFFFF)
pub const OFF_LUMA: u8 = 0xFF;

/// One pixel per matrix cell, opaque black on opaque white
pub fn to_luma_image(matrix: &BitMatrix) -> GrayImage {
    GrayImage::from_fn(matrix.width() as u32, matrix.height() as u32, |x, y| {
        if matrix.get(x as usize, y as usize) {
            Luma([ON_LUMA])
        } else {
            Luma([OFF_LUMA])
        }
    })
}

/// Serialise `matrix` as `format`
pub(crate) fn write_image(matrix: &BitMatrix, format: ImageFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    let image = to_luma_image(matrix);
    let (width, height) = image.dimensions();
    let mut out = Vec::new();

    match format {
        ImageFormat::Png => PngEncoder::new(&mut out).write_image(
            image.as_raw(),
            width,
            height,
            ExtendedColorType::L8,
        ),
        ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut out, jpeg_quality).write_image(
            image.as_raw(),
            width,
            height,
            ExtendedColorType::L8,
        ),
    }
    .map_err(QrError::Render)?;

    Ok(out)
}
