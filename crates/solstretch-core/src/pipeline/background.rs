//! Luminance-based background subtraction
//!
//! Estimates smooth illumination from a Gaussian-blurred luminance plane and
//! rescales each color channel by the normalized foreground signal. Working
//! in luminance only preserves hue; per-channel subtraction would introduce
//! color casts in the suppressed regions.

use super::{EnhanceError, RgbImage};

/// Dynamic range below which the foreground signal is considered flat.
const FLAT_SIGNAL_EPSILON: f32 = 1e-6;

/// Remove smooth background variation from an image.
///
/// The luminance plane is blurred with a Gaussian of standard deviation
/// `blur_sigma` (kernel width `2*round(sigma)+1`, minimum 3) and subtracted
/// from the raw luminance. The signed difference is normalized to [0, 1] by
/// its own range and applied as a per-pixel scale to every channel.
///
/// A flat signal (uniform image, or `blur_sigma == 0`) returns the input
/// unchanged rather than dividing by a degenerate range.
pub fn subtract_background(image: &RgbImage, blur_sigma: f32) -> Result<RgbImage, EnhanceError> {
    if !blur_sigma.is_finite() || blur_sigma < 0.0 {
        return Err(EnhanceError::invalid_parameter(
            "blur_sigma",
            format!("must be finite and >= 0, got {}", blur_sigma),
        ));
    }

    // Zero sigma degenerates to an identity blur and a zero signal map.
    if image.data.is_empty() || blur_sigma == 0.0 {
        return Ok(image.clone());
    }

    let gray = super::luminance(image);
    let background = gaussian_blur(
        &gray,
        image.width as usize,
        image.height as usize,
        blur_sigma,
    );

    // Signed foreground signal and its dynamic range
    let mut signal: Vec<f32> = gray
        .iter()
        .zip(background.iter())
        .map(|(raw, bg)| raw - bg)
        .collect();

    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for &v in &signal {
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    if range < FLAT_SIGNAL_EPSILON {
        return Ok(image.clone());
    }

    for v in signal.iter_mut() {
        *v = (*v - min) / range;
    }

    let mut data = Vec::with_capacity(image.data.len());
    for (pixel, &scale) in image.data.chunks_exact(3).zip(signal.iter()) {
        for &channel in pixel {
            let corrected = channel as f32 * scale;
            data.push(corrected.clamp(0.0, 255.0).round() as u8);
        }
    }

    Ok(RgbImage {
        width: image.width,
        height: image.height,
        data,
    })
}

/// Separable Gaussian blur of a single-channel plane.
///
/// Borders are clamped to the nearest edge sample.
fn gaussian_blur(plane: &[f32], width: usize, height: usize, sigma: f32) -> Vec<f32> {
    let kernel = gaussian_kernel(sigma);
    let half = (kernel.len() / 2) as isize;

    // Horizontal pass
    let mut temp = vec![0.0f32; plane.len()];
    for y in 0..height {
        let row = &plane[y * width..(y + 1) * width];
        for x in 0..width {
            let mut sum = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let sx = (x as isize + k as isize - half).clamp(0, width as isize - 1) as usize;
                sum += row[sx] * weight;
            }
            temp[y * width + x] = sum;
        }
    }

    // Vertical pass
    let mut out = vec![0.0f32; plane.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let sy = (y as isize + k as isize - half).clamp(0, height as isize - 1) as usize;
                sum += temp[sy * width + x] * weight;
            }
            out[y * width + x] = sum;
        }
    }

    out
}

/// Normalized 1-D Gaussian kernel of width `2*round(sigma)+1`, minimum 3.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let width = ((2.0 * sigma.round() + 1.0) as usize).max(3);
    let half = (width / 2) as isize;
    let denom = 2.0 * sigma * sigma;

    let mut kernel = Vec::with_capacity(width);
    let mut sum = 0.0f32;
    for i in -half..=half {
        let x = i as f32;
        let w = (-(x * x) / denom).exp();
        kernel.push(w);
        sum += w;
    }

    for w in kernel.iter_mut() {
        *w /= sum;
    }
    kernel
}

#[cfg(test)]
mod kernel_tests {
    use super::*;

    #[test]
    fn test_kernel_width_and_normalization() {
        let k = gaussian_kernel(25.0);
        assert_eq!(k.len(), 51);

        let k = gaussian_kernel(1.0);
        assert_eq!(k.len(), 3);

        // Sub-unit sigmas still get the minimum width
        let k = gaussian_kernel(0.3);
        assert_eq!(k.len(), 3);

        for sigma in [0.5f32, 1.0, 2.4, 25.0, 50.0] {
            let k = gaussian_kernel(sigma);
            let sum: f32 = k.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "kernel not normalized at {}", sigma);
        }
    }

    #[test]
    fn test_blur_preserves_flat_plane() {
        let plane = vec![42.0f32; 16];
        let blurred = gaussian_blur(&plane, 4, 4, 2.0);
        for v in blurred {
            assert!((v - 42.0).abs() < 1e-3);
        }
    }
}
