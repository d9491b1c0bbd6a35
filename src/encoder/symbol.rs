//! Symbol construction and pixel-matrix rendering.
//!
//! The `qrcode` crate owns everything inside the symbol (segment modes,
//! Reed-Solomon blocks, masking). This module only picks a version, prepends
//! an ECI header when asked, and scales the module grid into pixels.

use qrcode::bits::Bits;
use qrcode::optimize::Parser;
use qrcode::types::QrError as SymbolError;
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::error::{QrError, Result};
use crate::models::BitMatrix;

const MAX_VERSION: i16 = 40;

/// Build the smallest Model 2 symbol that holds `data` at `ec_level`
pub(crate) fn build_symbol(data: &[u8], eci: Option<u32>, ec_level: EcLevel) -> Result<QrCode> {
    for number in 1..=MAX_VERSION {
        let version = Version::Normal(number);
        match build_bits(data, eci, version, ec_level) {
            Ok(bits) => {
                log::debug!("symbol fits version {} at {:?}", number, ec_level);
                return QrCode::with_bits(bits, ec_level).map_err(symbol_error);
            }
            Err(SymbolError::DataTooLong) => continue,
            Err(err) => return Err(symbol_error(err)),
        }
    }

    Err(QrError::capacity(format!(
        "{} bytes do not fit a version {} symbol at level {:?}",
        data.len(),
        MAX_VERSION,
        ec_level
    )))
}

fn build_bits(
    data: &[u8],
    eci: Option<u32>,
    version: Version,
    ec_level: EcLevel,
) -> std::result::Result<Bits, SymbolError> {
    let mut bits = Bits::new(version);
    if let Some(designator) = eci {
        bits.push_eci_designator(designator)?;
    }
    bits.push_segments(data, Parser::new(data).optimize(version))?;
    bits.push_terminator(ec_level)?;
    Ok(bits)
}

fn symbol_error(err: SymbolError) -> QrError {
    match err {
        SymbolError::DataTooLong => QrError::capacity("data too long for the chosen version"),
        other => QrError::InvalidInput(other.to_string()),
    }
}

/// Scale a symbol into a `width x height` pixel matrix.
///
/// Every module becomes an `n x n` block where `n` is the largest integer
/// scale that fits the symbol plus `margin` modules per side. The symbol is
/// centred; leftover pixels become extra light border.
pub(crate) fn render(code: &QrCode, width: u32, height: u32, margin: u32) -> Result<BitMatrix> {
    let modules = code.width();
    let full = modules + 2 * margin as usize;
    let (width, height) = (width as usize, height as usize);

    if width < full || height < full {
        return Err(QrError::capacity(format!(
            "symbol needs at least {full}x{full} pixels ({modules} modules + margin {margin}), \
             requested {width}x{height}"
        )));
    }

    let multiple = (width / full).min(height / full);
    let left = (width - modules * multiple) / 2;
    let top = (height - modules * multiple) / 2;

    let mut output = BitMatrix::new(width, height);
    for (i, color) in code.to_colors().into_iter().enumerate() {
        if color == Color::Dark {
            let x = i % modules;
            let y = i / modules;
            output.set_region(left + x * multiple, top + y * multiple, multiple, multiple);
        }
    }

    Ok(output)
}
