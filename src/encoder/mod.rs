//! Encode orchestration: hints, output path, rendering, serialisation.

pub mod path;
pub mod raster;
pub mod symbol;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{DEFAULT_JPEG_QUALITY, DEFAULT_QRCODE_SIZE, EncodeHints};
use crate::error::{QrError, Result};
use crate::models::{BitMatrix, ImageFormat};

use path::resolve_output;

/// Non-fatal conditions noticed while encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeWarning {
    /// The output name ended in a suffix of another format
    SuffixOverridden {
        /// Suffix found on the caller's name
        suffix: String,
        /// Format actually written
        format: ImageFormat,
    },
}

impl fmt::Display for EncodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeWarning::SuffixOverridden { suffix, format } => write!(
                f,
                "output suffix '.{}' overridden by explicit format '{}'",
                suffix, format
            ),
        }
    }
}

/// What an encode-to-file call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutcome {
    /// Path of the written image
    pub path: PathBuf,
    /// Format of the written image
    pub format: ImageFormat,
    /// Non-fatal warnings raised along the way
    pub warnings: Vec<EncodeWarning>,
}

/// Encoder carrying its hints and raster settings
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    hints: EncodeHints,
    jpeg_quality: u8,
}

impl QrEncoder {
    /// Create an encoder with default hints (level H, UTF-8, margin 1)
    pub fn new() -> Self {
        Self::with_hints(EncodeHints::default())
    }

    /// Create an encoder with explicit hints
    pub fn with_hints(hints: EncodeHints) -> Self {
        Self {
            hints,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Set JPEG quality (clamped to 1..=100)
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Hints in effect
    pub fn hints(&self) -> &EncodeHints {
        &self.hints
    }

    /// Encode `content` into a `width x height` pixel matrix
    pub fn matrix(&self, content: &str, width: u32, height: u32) -> Result<BitMatrix> {
        if width == 0 || height == 0 {
            return Err(QrError::InvalidInput(format!(
                "image dimensions must be positive, got {width}x{height}"
            )));
        }

        let (data, eci) = self.hints.character_set.encode(content)?;
        let code = symbol::build_symbol(&data, eci, self.hints.error_correction.to_qrcode())?;
        symbol::render(&code, width, height, self.hints.margin)
    }

    /// Encode `content` into image bytes
    pub fn to_bytes(&self, content: &str, width: u32, height: u32, format: ImageFormat) -> Result<Vec<u8>> {
        let matrix = self.matrix(content, width, height)?;
        raster::write_image(&matrix, format, self.jpeg_quality)
    }

    /// Encode `content` and write it next to `output_name`.
    ///
    /// The final path may differ from `output_name` in its suffix; see
    /// [`EncodeOutcome::path`]. Missing parent directories are created.
    pub fn to_file(
        &self,
        content: &str,
        width: u32,
        height: u32,
        output_name: impl AsRef<Path>,
        format: Option<ImageFormat>,
    ) -> Result<EncodeOutcome> {
        let resolved = resolve_output(output_name.as_ref(), format)?;

        let mut warnings = Vec::new();
        if let Some(suffix) = resolved.overridden_suffix {
            let warning = EncodeWarning::SuffixOverridden {
                suffix,
                format: resolved.format,
            };
            log::warn!("{}", warning);
            warnings.push(warning);
        }

        let bytes = self.to_bytes(content, width, height, resolved.format)?;

        if let Some(dir) = resolved.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !dir.exists() {
                log::debug!("creating output directory {}", dir.display());
                fs::create_dir_all(dir).map_err(|source| QrError::Write {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        fs::write(&resolved.path, &bytes).map_err(|source| QrError::Write {
            path: resolved.path.clone(),
            source,
        })?;
        log::debug!(
            "wrote {} bytes of {} to {}",
            bytes.len(),
            resolved.format,
            resolved.path.display()
        );

        Ok(EncodeOutcome {
            path: resolved.path,
            format: resolved.format,
            warnings,
        })
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `content` to a file using default hints
pub fn encode(
    content: &str,
    width: u32,
    height: u32,
    output_name: impl AsRef<Path>,
    format: Option<ImageFormat>,
) -> Result<EncodeOutcome> {
    QrEncoder::new().to_file(content, width, height, output_name, format)
}

/// Encode `content` to a file using explicit hints
pub fn encode_with_hints(
    content: &str,
    width: u32,
    height: u32,
    output_name: impl AsRef<Path>,
    format: Option<ImageFormat>,
    hints: &EncodeHints,
) -> Result<EncodeOutcome> {
    QrEncoder::with_hints(*hints).to_file(content, width, height, output_name, format)
}

/// Encode `content` into a square image and return its bytes
pub fn encode_to_bytes(content: &str, size: u32, format: ImageFormat) -> Result<Vec<u8>> {
    QrEncoder::new().to_bytes(content, size, size, format)
}

/// Like [`encode_to_bytes`] with explicit hints and dimensions
pub fn encode_to_bytes_with_hints(
    content: &str,
    width: u32,
    height: u32,
    format: ImageFormat,
    hints: &EncodeHints,
) -> Result<Vec<u8>> {
    QrEncoder::with_hints(*hints).to_bytes(content, width, height, format)
}

/// Encode `content` into a pixel matrix without serialising it
pub fn encode_matrix(content: &str, width: u32, height: u32, hints: &EncodeHints) -> Result<BitMatrix> {
    QrEncoder::with_hints(*hints).matrix(content, width, height)
}

/// Square image named `output_name`, format taken from its suffix or JPEG
pub fn encode_named(content: &str, size: u32, output_name: impl AsRef<Path>) -> Result<EncodeOutcome> {
    encode(content, size, size, output_name, None)
}

/// Square image with a generated `qr_<millis>` name in the working directory
pub fn encode_sized(content: &str, size: u32) -> Result<EncodeOutcome> {
    encode_named(content, size, generated_name())
}

/// [`DEFAULT_QRCODE_SIZE`] square image with a generated name
pub fn encode_default(content: &str) -> Result<EncodeOutcome> {
    encode_sized(content, DEFAULT_QRCODE_SIZE)
}

fn generated_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("qr_{millis}")
}
