//! Image exporters
//!
//! Write processed images to JPEG or 8-bit RGB TIFF.

use std::path::Path;

use crate::models::OutputFormat;
use crate::pipeline::RgbImage;

/// JPEG quality used for all exports.
const JPEG_QUALITY: u8 = 95;

/// Export an image to the given format.
pub fn export_image<P: AsRef<Path>>(
    image: &RgbImage,
    path: P,
    format: OutputFormat,
) -> Result<(), String> {
    match format {
        OutputFormat::Jpeg => export_jpeg(image, path),
        OutputFormat::Tiff => export_tiff8(image, path),
    }
}

/// Export an image as JPEG.
pub fn export_jpeg<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), String> {
    use image::codecs::jpeg::JpegEncoder;
    use std::fs::File;
    use std::io::BufWriter;

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create JPEG file: {}", e))?;
    let writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
    image::ImageEncoder::write_image(
        encoder,
        &image.data,
        image.width,
        image.height,
        image::ExtendedColorType::Rgb8,
    )
    .map_err(|e| format!("Failed to write JPEG image: {}", e))
}

/// Export an image as 8-bit RGB TIFF.
pub fn export_tiff8<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create TIFF file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = tiff::encoder::TiffEncoder::new(writer)
        .map_err(|e| format!("Failed to create TIFF encoder: {}", e))?;

    encoder
        .write_image::<tiff::encoder::colortype::RGB8>(image.width, image.height, &image.data)
        .map_err(|e| format!("Failed to write TIFF image: {}", e))
}
