//! TIFF image decoder

use std::path::Path;

use crate::pipeline::RgbImage;

/// Decode a TIFF file to an 8-bit RGB buffer.
///
/// 16-bit material is scaled down to 8 bits; grayscale is expanded to RGB.
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<RgbImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open TIFF file: {}", e))?;

    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| format!("Failed to create TIFF decoder: {}", e))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| format!("Failed to get TIFF dimensions: {}", e))?;

    let color_type = decoder
        .colortype()
        .map_err(|e| format!("Failed to get TIFF color type: {}", e))?;

    let image_data = decoder
        .read_image()
        .map_err(|e| format!("Failed to read TIFF image data: {}", e))?;

    let data = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => expand_channels(&buf, color_type)?,
        tiff::decoder::DecodingResult::U16(buf) => {
            let narrowed: Vec<u8> = buf
                .iter()
                .map(|&v| (v as f32 / 65535.0 * 255.0).round() as u8)
                .collect();
            expand_channels(&narrowed, color_type)?
        }
        _ => {
            return Err("Unsupported TIFF sample format (expected 8- or 16-bit)".to_string());
        }
    };

    RgbImage::new(width, height, data).map_err(|e| e.to_string())
}

/// Expand grayscale samples to interleaved RGB; pass RGB through as-is.
fn expand_channels(buf: &[u8], color_type: tiff::ColorType) -> Result<Vec<u8>, String> {
    match color_type {
        tiff::ColorType::RGB(_) => Ok(buf.to_vec()),
        tiff::ColorType::Gray(_) => {
            let mut data = Vec::with_capacity(buf.len() * 3);
            for &v in buf {
                data.extend_from_slice(&[v, v, v]);
            }
            Ok(data)
        }
        other => Err(format!("Unsupported TIFF color type: {:?}", other)),
    }
}
