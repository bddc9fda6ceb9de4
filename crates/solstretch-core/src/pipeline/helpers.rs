//! Helper functions for the enhancement pipeline
//!
//! Luminance conversion, percentile computation, and statistics used by
//! several stages.

use super::RgbImage;

/// Convert an RGB image to a luminance plane (BT.601 weights).
///
/// Matches the weighting of the standard perceptual gray conversion used by
/// common imaging libraries for 8-bit material.
pub(crate) fn luminance(image: &RgbImage) -> Vec<f32> {
    image
        .data
        .chunks_exact(3)
        .map(|rgb| 0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32)
        .collect()
}

/// Percentile of a sorted population, linear-interpolation definition.
///
/// `pct` is in [0, 100]. The rank is `pct/100 * (n-1)`; fractional ranks
/// interpolate between the two neighboring order statistics.
pub(crate) fn percentile(sorted: &[f32], pct: f32) -> f32 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (n - 1) as f32;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Compute min, max, and mean statistics for debug output
pub(crate) fn compute_stats(data: &[u8]) -> (f32, f32, f32) {
    if data.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0u64;

    for &value in data {
        min = min.min(value);
        max = max.max(value);
        sum += value as u64;
    }

    (min as f32, max as f32, sum as f32 / data.len() as f32)
}
