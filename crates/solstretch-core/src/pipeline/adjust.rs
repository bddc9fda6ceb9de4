//! Post-pipeline linear adjustments
//!
//! Brightness offset, contrast about the mid-gray pivot, and per-channel
//! gains. Applied by the caller after the enhancement pipeline, mirroring
//! the viewer-side adjustments of the interactive application.

use super::{EnhanceError, RgbImage};
use crate::models::AdjustOptions;

/// Contrast pivots about mid-gray so a 1.0 contrast is the identity.
const CONTRAST_PIVOT: f32 = 127.5;

/// Apply brightness, contrast, and per-channel gains.
///
/// Order matters: brightness adds `brightness/100 * 255` uniformly, contrast
/// scales about 127.5, and the result is clamped to [0, 255] before the
/// per-channel gains are applied and clamped again.
pub fn adjust_linear(image: &RgbImage, options: &AdjustOptions) -> Result<RgbImage, EnhanceError> {
    options.validate()?;

    let offset = options.brightness / 100.0 * 255.0;
    let apply_brightness = options.brightness != 0.0;
    let apply_contrast = options.contrast != 1.0;
    let gains = [options.r_gain, options.g_gain, options.b_gain];

    let mut data = Vec::with_capacity(image.data.len());
    for pixel in image.data.chunks_exact(3) {
        for (channel, &gain) in pixel.iter().zip(gains.iter()) {
            let mut value = *channel as f32;
            if apply_brightness {
                value += offset;
            }
            if apply_contrast {
                value = (value - CONTRAST_PIVOT) * options.contrast + CONTRAST_PIVOT;
            }
            value = value.clamp(0.0, 255.0);

            value = (value * gain).clamp(0.0, 255.0);
            data.push(value.round() as u8);
        }
    }

    Ok(RgbImage {
        width: image.width,
        height: image.height,
        data,
    })
}
