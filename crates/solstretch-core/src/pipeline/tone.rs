//! Power-law (gamma) tone correction

use super::{EnhanceError, RgbImage};

/// Apply gamma correction through a 256-entry lookup table.
///
/// Each input value `i` maps to `255 * (i/255)^(1/gamma)`, rounded to the
/// nearest integer, applied identically to every channel. `gamma == 1.0` is
/// the exact identity.
pub fn correct_tone(image: &RgbImage, gamma: f32) -> Result<RgbImage, EnhanceError> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(EnhanceError::invalid_parameter(
            "gamma",
            format!("must be finite and > 0, got {}", gamma),
        ));
    }

    let inv_gamma = 1.0 / gamma;
    let mut table = [0u8; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let normalized = i as f32 / 255.0;
        *entry = (normalized.powf(inv_gamma) * 255.0).round() as u8;
    }

    let data = image.data.iter().map(|&v| table[v as usize]).collect();

    Ok(RgbImage {
        width: image.width,
        height: image.height,
        data,
    })
}
