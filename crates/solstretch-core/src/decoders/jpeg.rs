//! JPEG image decoder

use std::path::Path;

use crate::pipeline::RgbImage;

/// Decode a JPEG file to an 8-bit RGB buffer.
pub(crate) fn decode_jpeg<P: AsRef<Path>>(path: P) -> Result<RgbImage, String> {
    let dynamic = image::open(path.as_ref())
        .map_err(|e| format!("Failed to decode JPEG file: {}", e))?;

    let rgb = dynamic.to_rgb8();
    let (width, height) = rgb.dimensions();

    RgbImage::new(width, height, rgb.into_raw()).map_err(|e| e.to_string())
}
