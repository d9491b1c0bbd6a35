//! Output path resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{QrError, Result};
use crate::models::ImageFormat;

/// Where and how the encoder will write
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedOutput {
    pub path: PathBuf,
    pub format: ImageFormat,
    /// Suffix that was replaced by an explicit, different format
    pub overridden_suffix: Option<String>,
}

/// Resolve the final path and format for `name`.
///
/// A recognized suffix (`png`, `jpg`, `jpeg`, any case) is replaced by the
/// canonical suffix of the chosen format. Anything else is kept and the
/// canonical suffix is appended. Trailing dots are dropped first, and a
/// dot-file such as `.png` counts as a bare suffix.
pub(crate) fn resolve_output(name: &Path, explicit: Option<ImageFormat>) -> Result<ResolvedOutput> {
    // Normalising through components drops trailing separators
    let name: PathBuf = name.components().collect();
    if name.file_name().is_none() {
        return Err(QrError::InvalidInput(format!(
            "output name '{}' has no file name",
            name.display()
        )));
    }

    let Some(file_name) = name.file_name().and_then(|f| f.to_str()) else {
        // Non UTF-8 names cannot carry a recognized suffix
        let format = explicit.unwrap_or_default();
        return Ok(ResolvedOutput {
            path: append_extension(&name, format.extension()),
            format,
            overridden_suffix: None,
        });
    };

    let trimmed = file_name.trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(QrError::InvalidInput(format!(
            "output name '{}' has no file name",
            name.display()
        )));
    }

    // ".png" counts as a bare suffix, so split on the last dot including a leading one
    let (stem, suffix) = match trimmed.rsplit_once('.') {
        Some((stem, suffix)) => (stem, Some(suffix)),
        None => (trimmed, None),
    };
    let matched = suffix.and_then(ImageFormat::from_extension);
    let format = explicit.or(matched).unwrap_or_default();

    let overridden_suffix = match (explicit, matched, suffix) {
        (Some(explicit), Some(found), Some(suffix)) if explicit != found => Some(suffix.to_string()),
        _ => None,
    };

    let base = if matched.is_some() { stem } else { trimmed };
    let path = name.with_file_name(format!("{}.{}", base, format.extension()));

    Ok(ResolvedOutput {
        path,
        format,
        overridden_suffix,
    })
}

fn append_extension(name: &Path, ext: &str) -> PathBuf {
    let mut raw = OsString::from(name.as_os_str());
    raw.push(".");
    raw.push(ext);
    PathBuf::from(raw)
}
