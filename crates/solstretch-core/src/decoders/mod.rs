//! Image decoders
//!
//! Support for JPEG and TIFF input files. Decoders hand the pipeline an
//! 8-bit interleaved RGB buffer; deeper TIFF material is scaled down and
//! grayscale sources are expanded to three channels.

mod jpeg;
mod tiff;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::pipeline::RgbImage;

/// Decode an image from a file path, dispatching on the extension.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "jpg" | "jpeg" => jpeg::decode_jpeg(path),
        "tif" | "tiff" => tiff::decode_tiff(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}
