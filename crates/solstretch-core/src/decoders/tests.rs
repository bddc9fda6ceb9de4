//! Tests for image decoders

use super::*;
use crate::exporters;
use crate::models::OutputFormat;

fn checker_image(width: u32, height: u32) -> RgbImage {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 2 == 0 {
                data.extend_from_slice(&[210, 40, 40]);
            } else {
                data.extend_from_slice(&[30, 60, 120]);
            }
        }
    }
    RgbImage::new(width, height, data).unwrap()
}

#[test]
fn test_tiff_roundtrip_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.tif");

    let image = checker_image(16, 10);
    exporters::export_image(&image, &path, OutputFormat::Tiff).unwrap();

    let decoded = decode_image(&path).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn test_jpeg_roundtrip_preserves_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.jpg");

    let image = checker_image(24, 18);
    exporters::export_image(&image, &path, OutputFormat::Jpeg).unwrap();

    let decoded = decode_image(&path).unwrap();
    assert_eq!(decoded.width, 24);
    assert_eq!(decoded.height, 18);
    assert_eq!(decoded.data.len(), image.data.len());
}

#[test]
fn test_jpeg_uniform_image_survives_compression() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uniform.jpg");

    let mut data = Vec::new();
    for _ in 0..64 {
        data.extend_from_slice(&[120, 120, 120]);
    }
    let image = RgbImage::new(8, 8, data).unwrap();
    exporters::export_image(&image, &path, OutputFormat::Jpeg).unwrap();

    let decoded = decode_image(&path).unwrap();
    for (a, b) in image.data.iter().zip(decoded.data.iter()) {
        assert!((*a as i32 - *b as i32).abs() <= 4, "JPEG drifted too far");
    }
}

#[test]
fn test_unsupported_extension_rejected() {
    assert!(decode_image("photo.png").is_err());
    assert!(decode_image("photo").is_err());
    assert!(decode_image("photo.bmp").is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let err = decode_image("definitely/not/here.tif").unwrap_err();
    assert!(err.contains("Failed to open"));
}
