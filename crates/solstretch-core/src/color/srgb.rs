//! sRGB transfer function (IEC 61966-2-1)

/// Decode an sRGB-encoded component (0.0-1.0) to linear light.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light component to sRGB (0.0-1.0).
///
/// Out-of-gamut inputs are not clamped here; callers clamp after encoding.
#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
