//! Error type shared by the encoder and decoder.

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QrError>;

/// Everything that can go wrong while encoding or decoding
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// Content does not fit the requested size or correction level
    #[error("capacity exceeded: {reason}")]
    Capacity {
        /// What overflowed
        reason: String,
    },

    /// Arguments the encoder cannot act on
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Creating directories or writing the image failed
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialising the raster failed
    #[error("failed to render image: {0}")]
    Render(#[source] image::ImageError),

    /// The image to decode is missing or unreadable
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path being read (empty for in-memory input)
        path: PathBuf,
        /// Underlying image error
        #[source]
        source: image::ImageError,
    },

    /// No recognizable barcode in the image
    #[error("no barcode found: {0}")]
    NotFound(String),
}

/// Coarse error category for callers that only need to branch on cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`QrError::Capacity`]
    Capacity,
    /// See [`QrError::InvalidInput`]
    InvalidInput,
    /// See [`QrError::Write`] and [`QrError::Render`]
    Output,
    /// See [`QrError::Read`]
    Input,
    /// See [`QrError::NotFound`]
    NotFound,
}

impl QrError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrError::Capacity { .. } => ErrorKind::Capacity,
            QrError::InvalidInput(_) => ErrorKind::InvalidInput,
            QrError::Write { .. } | QrError::Render(_) => ErrorKind::Output,
            QrError::Read { .. } => ErrorKind::Input,
            QrError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    pub(crate) fn capacity(reason: impl Into<String>) -> Self {
        QrError::Capacity {
            reason: reason.into(),
        }
    }
}
