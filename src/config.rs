//! Encoder configuration.
//!
//! The defaults reproduce the fixed policy the utility always used:
//! error correction H, UTF-8 text, one module of margin.

use std::str::FromStr;

use crate::error::QrError;
use crate::models::ECLevel;

/// Default square image size in pixels
pub const DEFAULT_QRCODE_SIZE: u32 = 300;

/// Default quiet zone around the symbol, in modules
pub const DEFAULT_MARGIN: u32 = 1;

/// JPEG quality used when writing JPEG output
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// ECI assignment number for UTF-8
pub(crate) const UTF8_ECI: u32 = 26;

/// Character set used to turn content into bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterSet {
    /// UTF-8; non-ASCII content is tagged with an ECI segment
    #[default]
    Utf8,
    /// ISO-8859-1; characters above U+00FF are rejected
    Iso8859_1,
}

impl CharacterSet {
    /// Encode `content` into bytes plus the ECI designator to emit, if any
    pub(crate) fn encode(self, content: &str) -> Result<(Vec<u8>, Option<u32>), QrError> {
        match self {
            CharacterSet::Utf8 => {
                let eci = if content.is_ascii() { None } else { Some(UTF8_ECI) };
                Ok((content.as_bytes().to_vec(), eci))
            }
            CharacterSet::Iso8859_1 => content
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| {
                        QrError::InvalidInput(format!(
                            "character {c:?} is not representable in ISO-8859-1"
                        ))
                    })
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(|bytes| (bytes, None)),
        }
    }
}

impl FromStr for CharacterSet {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(CharacterSet::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" => Ok(CharacterSet::Iso8859_1),
            other => Err(QrError::InvalidInput(format!("unknown character set: {other}"))),
        }
    }
}

/// Hints handed to the symbol builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeHints {
    /// Error correction level
    pub error_correction: ECLevel,
    /// How text is turned into bytes
    pub character_set: CharacterSet,
    /// Quiet zone in modules on each side
    pub margin: u32,
}

impl Default for EncodeHints {
    fn default() -> Self {
        Self {
            error_correction: ECLevel::H,
            character_set: CharacterSet::Utf8,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl EncodeHints {
    /// Replace the error correction level
    pub fn with_error_correction(mut self, level: ECLevel) -> Self {
        self.error_correction = level;
        self
    }

    /// Replace the character set
    pub fn with_character_set(mut self, character_set: CharacterSet) -> Self {
        self.character_set = character_set;
        self
    }

    /// Replace the margin
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }
}
