//! End-to-end tests: encode to disk or memory, decode back, and check the
//! failure modes callers branch on.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use qr_util::{
    ECLevel, EncodeHints, EncodeWarning, ErrorKind, ImageFormat, QrError, Symbology, decode,
    decode_bytes, decode_image, encode, encode_default, encode_matrix, encode_named,
    encode_to_bytes, encode_with_hints,
};
use rxing::{BarcodeFormat, MultiFormatWriter, Writer};
use std::fs;
use std::path::PathBuf;

/// Removes a file when the test ends, pass or fail
struct RemoveOnDrop(PathBuf);

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

/// Render a symbol with rxing's writer onto a white canvas with a quiet border
fn foreign_symbol(contents: &str, format: &BarcodeFormat, width: i32, height: i32) -> DynamicImage {
    const BORDER: u32 = 20;
    let bits = MultiFormatWriter::default()
        .encode(contents, format, width, height)
        .expect("Failed to write symbol");
    let (w, h) = (bits.getWidth(), bits.getHeight());
    let canvas = GrayImage::from_fn(w + 2 * BORDER, h + 2 * BORDER, |x, y| {
        let inside = (BORDER..BORDER + w).contains(&x) && (BORDER..BORDER + h).contains(&y);
        if inside && bits.get(x - BORDER, y - BORDER) {
            Luma([0])
        } else {
            Luma([255])
        }
    });
    DynamicImage::ImageLuma8(canvas)
}

/// Fresh per-test scratch directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("qr_util_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

#[test]
fn test_round_trip_utf8_contents() {
    let dir = scratch_dir("utf8");
    let contents = [
        "hello world",
        "0123456789",
        "测试生成二维码",
        "Grüße aus Köln",
        "emoji 🚀✨",
        "mixed: ASCII + 日本語 + кириллица",
    ];

    for (i, content) in contents.iter().enumerate() {
        let outcome = encode(content, 300, 300, dir.join(format!("code_{i}")), Some(ImageFormat::Png))
            .expect("encode failed");
        let result = decode(&outcome.path).expect("decode failed");
        assert_eq!(result.text(), *content, "content mismatch for case {}", i);
        assert_eq!(result.format(), &Symbology::QrCode);
    }
}

#[test]
fn test_round_trip_long_content_at_level_h() {
    let content: String = "abcdefghijklmnopqrstuvwxyz".chars().cycle().take(400).collect();
    let bytes = encode_to_bytes(&content, 600, ImageFormat::Png).expect("encode failed");
    let result = decode_bytes(&bytes).expect("decode failed");
    assert_eq!(result.text(), content);
}

#[test]
fn test_round_trip_jpeg_file() {
    let dir = scratch_dir("jpeg");
    let outcome = encode("jpeg payload", 300, 300, dir.join("plain"), None).expect("encode failed");
    assert_eq!(outcome.format, ImageFormat::Jpeg);
    assert_eq!(outcome.path, dir.join("plain.jpg"));
    assert!(outcome.warnings.is_empty());

    let result = decode(&outcome.path).expect("decode failed");
    assert_eq!(result.text(), "jpeg payload");
}

#[test]
fn test_non_square_output() {
    let dir = scratch_dir("rect");
    let outcome = encode("wide", 400, 250, dir.join("wide.png"), None).expect("encode failed");
    let image = image::open(&outcome.path).expect("open failed");
    assert_eq!((image.width(), image.height()), (400, 250));
    assert_eq!(decode(&outcome.path).unwrap().text(), "wide");
}

#[test]
fn test_encoding_is_idempotent() {
    let hints = EncodeHints::default();
    let a = encode_matrix("stable content", 300, 300, &hints).unwrap();
    let b = encode_matrix("stable content", 300, 300, &hints).unwrap();
    assert_eq!(a, b);

    let first = encode_to_bytes("stable content", 300, ImageFormat::Png).unwrap();
    let second = encode_to_bytes("stable content", 300, ImageFormat::Png).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_explicit_format_overrides_png_suffix() {
    let dir = scratch_dir("override");
    let outcome = encode("override", 300, 300, dir.join("ticket.png"), Some(ImageFormat::Jpeg))
        .expect("encode failed");

    assert_eq!(outcome.path, dir.join("ticket.jpg"));
    assert!(!dir.join("ticket.png").exists());
    assert_eq!(
        outcome.warnings,
        vec![EncodeWarning::SuffixOverridden {
            suffix: "png".to_string(),
            format: ImageFormat::Jpeg,
        }]
    );

    let bytes = fs::read(&outcome.path).unwrap();
    assert_eq!(&bytes[..3], &[0xFF, 0xD8, 0xFF]);
    assert_eq!(ImageFormat::detect(&bytes), Some(ImageFormat::Jpeg));
}

#[test]
fn test_uppercase_suffix_is_recognized() {
    let dir = scratch_dir("upper");
    let outcome = encode_named("upper", 200, dir.join("CODE.PNG")).expect("encode failed");
    assert_eq!(outcome.path, dir.join("CODE.png"));
    assert_eq!(outcome.format, ImageFormat::Png);
    let bytes = fs::read(&outcome.path).unwrap();
    assert_eq!(ImageFormat::detect(&bytes), Some(ImageFormat::Png));
}

#[test]
fn test_missing_directories_are_created() {
    let dir = scratch_dir("nested");
    let target = dir.join("a").join("b").join("c").join("qr");
    assert!(!dir.join("a").exists());

    let outcome = encode("nested", 200, 200, &target, Some(ImageFormat::Png)).expect("encode failed");
    assert_eq!(outcome.path, dir.join("a/b/c/qr.png"));
    assert!(outcome.path.is_file());
}

#[test]
fn test_write_failure_is_reported() {
    let dir = scratch_dir("blocked");
    // A regular file where a directory is expected
    let blocker = dir.join("blocker");
    fs::write(&blocker, b"not a dir").unwrap();

    let err = encode("blocked", 200, 200, blocker.join("qr"), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Output);
    assert!(matches!(err, QrError::Write { .. }));
}

#[test]
fn test_photo_without_barcode_is_not_found() {
    let dir = scratch_dir("photo");
    let photo = RgbImage::from_fn(320, 240, |x, y| {
        let dx = x as f32 - 160.0;
        let dy = y as f32 - 120.0;
        let d = (dx * dx + dy * dy).sqrt();
        Rgb([
            (255.0 - d * 0.8).max(0.0) as u8,
            (x * 255 / 320) as u8,
            (y * 255 / 240) as u8,
        ])
    });
    let path = dir.join("sunset.png");
    DynamicImage::ImageRgb8(photo).save(&path).unwrap();

    let err = decode(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_missing_image_is_read_error() {
    let dir = scratch_dir("missing");
    let err = decode(dir.join("nope.png")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert!(matches!(err, QrError::Read { .. }));
}

#[test]
fn test_capacity_errors() {
    let dir = scratch_dir("capacity");

    // Too long for any version at level H
    let too_long = "x".repeat(1300);
    let err = encode(&too_long, 800, 800, dir.join("long"), Some(ImageFormat::Png)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert!(!dir.join("long.png").exists());

    // Fits a symbol, but not the requested pixel size
    let err = encode("hello", 10, 10, dir.join("tiny"), Some(ImageFormat::Png)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert!(!dir.join("tiny.png").exists());
}

#[test]
fn test_hints_are_honoured() {
    let dir = scratch_dir("hints");
    let hints = EncodeHints::default()
        .with_error_correction(ECLevel::L)
        .with_margin(4);
    let outcome = encode_with_hints("low ec", 300, 300, dir.join("low"), Some(ImageFormat::Png), &hints)
        .expect("encode failed");
    assert_eq!(decode(&outcome.path).unwrap().text(), "low ec");
}

#[test]
fn test_encode_default_uses_generated_name() {
    let outcome = encode_default("default size").expect("encode failed");
    let _cleanup = RemoveOnDrop(outcome.path.clone());
    let name = outcome.path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("qr_") && name.ends_with(".jpg"), "unexpected name {}", name);

    let image = image::open(&outcome.path).expect("open failed");
    assert_eq!((image.width(), image.height()), (300, 300));
}

#[test]
fn test_code128_symbology_is_reported() {
    let image = foreign_symbol("ABC12345", &BarcodeFormat::CODE_128, 400, 100);
    let result = decode_image(&image).expect("Failed to decode Code 128");
    assert_eq!(result.text(), "ABC12345");
    assert_eq!(result.format(), &Symbology::Code128);
}

#[test]
fn test_data_matrix_symbology_is_reported() {
    let image = foreign_symbol("ABC12345", &BarcodeFormat::DATA_MATRIX, 200, 200);
    let result = decode_image(&image).expect("Failed to decode Data Matrix");
    assert_eq!(result.text(), "ABC12345");
    assert_eq!(result.format(), &Symbology::DataMatrix);
}
