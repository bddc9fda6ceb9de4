//! Image enhancement pipeline
//!
//! Deterministic four-stage pipeline for revealing faint pigment against a
//! rock background, plus the post-pipeline linear adjustments:
//! - `background`: luminance-based background subtraction
//! - `dstretch`: decorrelation stretch in CIELAB
//! - `clahe`: contrast-limited adaptive histogram equalization on luminance
//! - `tone`: power-law (gamma) remap
//! - `adjust`: brightness/contrast and per-channel gains
//!
//! Every stage borrows its input, allocates a fresh output, and preserves
//! width, height, and channel count.

mod adjust;
mod background;
mod clahe;
mod dstretch;
mod helpers;
mod tone;


pub use adjust::adjust_linear;
pub use background::subtract_background;
pub use clahe::equalize_local_contrast;
pub use dstretch::stretch_perceptual;
pub use tone::correct_tone;

pub(crate) use helpers::{compute_stats, luminance, percentile};

use crate::models::EnhanceOptions;
use crate::verbose_println;

/// Errors produced by the enhancement pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnhanceError {
    /// A parameter is outside its valid domain. Raised before any pixel work.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The linear decomposition in the stretch stage failed numerically.
    #[error("decomposition failed: {0}")]
    Decomposition(String),
}

impl EnhanceError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: String) -> Self {
        Self::InvalidParameter { name, reason }
    }
}

/// 8-bit RGB image buffer
///
/// Pixels are stored row-major as interleaved RGB triplets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved RGB data, `width * height * 3` bytes
    pub data: Vec<u8>,
}

impl RgbImage {
    /// Create an image buffer, checking that the data length matches the
    /// dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EnhanceError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(EnhanceError::invalid_parameter(
                "image",
                format!(
                    "buffer length {} does not match {}x{}x3 = {}",
                    data.len(),
                    width,
                    height,
                    expected
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Execute the full enhancement pipeline.
///
/// Runs background subtraction, decorrelation stretch, local contrast
/// equalization, and tone correction strictly in that order. Pure function:
/// the same image and options always produce the same output. The caller
/// applies [`adjust_linear`] separately, after the pipeline.
pub fn enhance(image: &RgbImage, options: &EnhanceOptions) -> Result<RgbImage, EnhanceError> {
    options.validate()?;

    let subtracted = subtract_background(image, options.blur_sigma)?;
    log_stage("background subtraction", &subtracted);

    let stretched = stretch_perceptual(
        &subtracted,
        options.low_percentile,
        options.high_percentile,
    )?;
    log_stage("decorrelation stretch", &stretched);

    let equalized = equalize_local_contrast(&stretched, options.clip_limit, options.tile_grid)?;
    log_stage("local equalization", &equalized);

    let corrected = correct_tone(&equalized, options.gamma)?;
    log_stage("tone correction", &corrected);

    Ok(corrected)
}

fn log_stage(name: &str, image: &RgbImage) {
    if crate::config::is_verbose() {
        let (min, max, mean) = compute_stats(&image.data);
        verbose_println!(
            "[enhance] after {} - min: {:.1}, max: {:.1}, mean: {:.2}",
            name,
            min,
            max,
            mean
        );
    }
}
