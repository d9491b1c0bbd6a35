use std::fmt;
use std::str::FromStr;

use crate::error::QrError;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Map to the symbol builder's level
    pub(crate) fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            other => Err(QrError::InvalidInput(format!(
                "unknown error correction level: {other} (expected L/M/Q/H)"
            ))),
        }
    }
}

/// Barcode family reported by the reader
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbology {
    /// QR code (Model 2)
    QrCode,
    /// Micro QR code
    MicroQrCode,
    /// Data Matrix
    DataMatrix,
    /// Aztec
    Aztec,
    /// PDF417
    Pdf417,
    /// MaxiCode
    MaxiCode,
    /// EAN-13
    Ean13,
    /// EAN-8
    Ean8,
    /// UPC-A
    UpcA,
    /// UPC-E
    UpcE,
    /// Code 39
    Code39,
    /// Code 93
    Code93,
    /// Code 128
    Code128,
    /// Codabar
    Codabar,
    /// Interleaved 2 of 5
    Itf,
    /// GS1 DataBar (RSS-14)
    Rss14,
    /// GS1 DataBar Expanded
    RssExpanded,
    /// Any family without a dedicated variant
    Other(String),
}

impl From<&rxing::BarcodeFormat> for Symbology {
    fn from(format: &rxing::BarcodeFormat) -> Self {
        use rxing::BarcodeFormat as F;
        match format {
            F::QR_CODE => Symbology::QrCode,
            F::MICRO_QR_CODE => Symbology::MicroQrCode,
            F::DATA_MATRIX => Symbology::DataMatrix,
            F::AZTEC => Symbology::Aztec,
            F::PDF_417 => Symbology::Pdf417,
            F::MAXICODE => Symbology::MaxiCode,
            F::EAN_13 => Symbology::Ean13,
            F::EAN_8 => Symbology::Ean8,
            F::UPC_A => Symbology::UpcA,
            F::UPC_E => Symbology::UpcE,
            F::CODE_39 => Symbology::Code39,
            F::CODE_93 => Symbology::Code93,
            F::CODE_128 => Symbology::Code128,
            F::CODABAR => Symbology::Codabar,
            F::ITF => Symbology::Itf,
            F::RSS_14 => Symbology::Rss14,
            F::RSS_EXPANDED => Symbology::RssExpanded,
            other => Symbology::Other(format!("{other:?}")),
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbology::QrCode => "QR_CODE",
            Symbology::MicroQrCode => "MICRO_QR_CODE",
            Symbology::DataMatrix => "DATA_MATRIX",
            Symbology::Aztec => "AZTEC",
            Symbology::Pdf417 => "PDF_417",
            Symbology::MaxiCode => "MAXICODE",
            Symbology::Ean13 => "EAN_13",
            Symbology::Ean8 => "EAN_8",
            Symbology::UpcA => "UPC_A",
            Symbology::UpcE => "UPC_E",
            Symbology::Code39 => "CODE_39",
            Symbology::Code93 => "CODE_93",
            Symbology::Code128 => "CODE_128",
            Symbology::Codabar => "CODABAR",
            Symbology::Itf => "ITF",
            Symbology::Rss14 => "RSS_14",
            Symbology::RssExpanded => "RSS_EXPANDED",
            Symbology::Other(name) => name,
        };
        f.write_str(name)
    }
}

/// Text and symbology recovered from an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    text: String,
    format: Symbology,
}

impl DecodeResult {
    pub(crate) fn new(text: String, format: Symbology) -> Self {
        Self { text, format }
    }

    /// Decoded content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Detected barcode family
    pub fn format(&self) -> &Symbology {
        &self.format
    }

    /// Consume the result, keeping only the text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content: {}\nformat: {}", self.text, self.format)
    }
}
