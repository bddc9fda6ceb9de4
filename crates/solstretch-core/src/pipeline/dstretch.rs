//! Decorrelation stretch in CIELAB ("DStretch")
//!
//! Projects the pixel population onto its principal variation axes in a
//! rescaled LAB space and renormalizes each axis by percentile clipping.
//! Stretching along the image's own variance directions amplifies faint
//! pigment-to-rock contrast that fixed channel axes would miss.

use nalgebra::{Matrix3, Vector3};

use super::{EnhanceError, RgbImage};
use crate::color::{lab_to_rgb, linear_to_srgb, rgb_to_lab, srgb_to_linear, Lab};

/// Forced percentile window when an axis has no variance.
const DEGENERATE_RANGE: f32 = 1e-4;

/// Total-variance floor below which the population is treated as flat.
const FLAT_VARIANCE_EPSILON: f64 = 1e-12;

/// Stretch an image along its principal color-variation axes.
///
/// Pixels are converted to CIELAB, each axis rescaled to roughly [0, 1]
/// (L/100, (a+128)/255, (b+128)/255), and a 3-component principal-component
/// decomposition fitted over the full population. Scores on each component
/// are linearly rescaled so the `low_percentile`/`high_percentile` values
/// map to 0/1 (clamped), then pixel coordinates are rebuilt by inverting the
/// transposed loading matrix and the result converted back to RGB.
///
/// The decomposition is recomputed on every call; nothing is cached. A
/// population with no color variance (uniform image, or fewer than two
/// pixels) returns the input unchanged. Numeric failure (a non-finite
/// covariance or a singular loading matrix) is reported as
/// [`EnhanceError::Decomposition`].
///
/// Eigenvector signs are fixed by orienting each loading so its
/// largest-magnitude coefficient is positive, making the output
/// deterministic for a fixed image.
pub fn stretch_perceptual(
    image: &RgbImage,
    low_percentile: f32,
    high_percentile: f32,
) -> Result<RgbImage, EnhanceError> {
    validate_percentiles(low_percentile, high_percentile)?;

    let n = image.pixel_count();
    if n < 2 {
        return Ok(image.clone());
    }

    // Flattened population of rescaled (L, a, b) samples
    let mut samples = Vec::with_capacity(n * 3);
    for pixel in image.data.chunks_exact(3) {
        let lab = rgb_to_lab(
            srgb_to_linear(pixel[0] as f32 / 255.0),
            srgb_to_linear(pixel[1] as f32 / 255.0),
            srgb_to_linear(pixel[2] as f32 / 255.0),
        );
        samples.push(lab.l / 100.0);
        samples.push((lab.a + 128.0) / 255.0);
        samples.push((lab.b + 128.0) / 255.0);
    }

    let (mean, covariance) = sample_covariance(&samples);
    if !covariance.iter().all(|v| v.is_finite()) {
        return Err(EnhanceError::Decomposition(
            "covariance matrix contains non-finite values".to_string(),
        ));
    }
    if covariance.trace() < FLAT_VARIANCE_EPSILON {
        // No color variance to decorrelate
        return Ok(image.clone());
    }

    let loadings = principal_axes(&covariance);

    // Per-pixel scores along each principal axis
    let mut scores = vec![0.0f32; n * 3];
    for (i, sample) in samples.chunks_exact(3).enumerate() {
        let centered = [
            sample[0] as f64 - mean[0],
            sample[1] as f64 - mean[1],
            sample[2] as f64 - mean[2],
        ];
        for axis in 0..3 {
            let row = loadings.row(axis);
            scores[i * 3 + axis] =
                (row[0] * centered[0] + row[1] * centered[1] + row[2] * centered[2]) as f32;
        }
    }

    // Percentile-normalize each axis independently
    for axis in 0..3 {
        let mut axis_scores: Vec<f32> = scores[axis..].iter().step_by(3).copied().collect();
        axis_scores.sort_unstable_by(|a, b| a.total_cmp(b));

        let lo = super::percentile(&axis_scores, low_percentile);
        let mut hi = super::percentile(&axis_scores, high_percentile);
        if hi <= lo {
            hi = lo + DEGENERATE_RANGE;
        }

        let range = hi - lo;
        for value in scores[axis..].iter_mut().step_by(3) {
            *value = ((*value - lo) / range).clamp(0.0, 1.0);
        }
    }

    // Invert the transposed loading matrix to rebuild axis coordinates from
    // the normalized scores
    let inverse = loadings.transpose().try_inverse().ok_or_else(|| {
        EnhanceError::Decomposition("loading matrix is singular".to_string())
    })?;

    let mut data = Vec::with_capacity(image.data.len());
    for score in scores.chunks_exact(3) {
        let mut reconstructed = [0.0f64; 3];
        for (j, value) in reconstructed.iter_mut().enumerate() {
            *value = score[0] as f64 * inverse[(0, j)]
                + score[1] as f64 * inverse[(1, j)]
                + score[2] as f64 * inverse[(2, j)];
        }

        // Undo the per-axis rescaling and return to RGB
        let lab = Lab {
            l: (reconstructed[0] * 100.0) as f32,
            a: (reconstructed[1] * 255.0 - 128.0) as f32,
            b: (reconstructed[2] * 255.0 - 128.0) as f32,
        };
        let (r, g, b) = lab_to_rgb(lab);
        data.push(quantize(r));
        data.push(quantize(g));
        data.push(quantize(b));
    }

    Ok(RgbImage {
        width: image.width,
        height: image.height,
        data,
    })
}

fn validate_percentiles(low: f32, high: f32) -> Result<(), EnhanceError> {
    if !low.is_finite() || !high.is_finite() || low < 0.0 || high > 100.0 || low >= high {
        return Err(EnhanceError::invalid_parameter(
            "percentiles",
            format!("require 0 <= low < high <= 100, got low={} high={}", low, high),
        ));
    }
    Ok(())
}

/// Encode a linear component to an sRGB byte, clamping out-of-gamut values.
#[inline]
fn quantize(linear: f32) -> u8 {
    (linear_to_srgb(linear).clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Mean vector and sample covariance (n-1 denominator) of a flat population
/// of 3-component samples. Accumulated in f64 for stability.
fn sample_covariance(samples: &[f32]) -> (Vector3<f64>, Matrix3<f64>) {
    let n = (samples.len() / 3) as f64;

    let mut mean = Vector3::zeros();
    for sample in samples.chunks_exact(3) {
        mean[0] += sample[0] as f64;
        mean[1] += sample[1] as f64;
        mean[2] += sample[2] as f64;
    }
    mean /= n;

    let mut cov = Matrix3::zeros();
    for sample in samples.chunks_exact(3) {
        let d = Vector3::new(
            sample[0] as f64 - mean[0],
            sample[1] as f64 - mean[1],
            sample[2] as f64 - mean[2],
        );
        cov += d * d.transpose();
    }
    cov /= n - 1.0;

    (mean, cov)
}

/// Principal axes of a covariance matrix as rows, ordered by descending
/// explained variance, with the sign convention applied.
fn principal_axes(covariance: &Matrix3<f64>) -> Matrix3<f64> {
    let eigen = nalgebra::SymmetricEigen::new(*covariance);

    // Order eigenpairs by descending eigenvalue
    let mut order = [0usize, 1, 2];
    order.sort_unstable_by(|&a, &b| {
        eigen.eigenvalues[b]
            .partial_cmp(&eigen.eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut loadings = Matrix3::zeros();
    for (row, &idx) in order.iter().enumerate() {
        let mut axis = eigen.eigenvectors.column(idx).clone_owned();

        // Sign convention: largest-magnitude coefficient is positive
        let mut dominant = 0;
        for j in 1..3 {
            if axis[j].abs() > axis[dominant].abs() {
                dominant = j;
            }
        }
        if axis[dominant] < 0.0 {
            axis = -axis;
        }

        loadings.set_row(row, &axis.transpose());
    }

    loadings
}

#[cfg(test)]
mod decomposition_tests {
    use super::*;

    #[test]
    fn test_principal_axes_recover_dominant_direction() {
        // Variance concentrated on the first axis
        let cov = Matrix3::new(4.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.25);
        let loadings = principal_axes(&cov);

        assert!((loadings[(0, 0)].abs() - 1.0).abs() < 1e-9);
        assert!((loadings[(1, 1)].abs() - 1.0).abs() < 1e-9);
        assert!((loadings[(2, 2)].abs() - 1.0).abs() < 1e-9);

        // Sign convention makes dominant coefficients positive
        assert!(loadings[(0, 0)] > 0.0);
        assert!(loadings[(1, 1)] > 0.0);
        assert!(loadings[(2, 2)] > 0.0);
    }

    #[test]
    fn test_principal_axes_orthonormal() {
        let cov = Matrix3::new(2.0, 0.5, 0.1, 0.5, 1.5, 0.3, 0.1, 0.3, 1.0);
        let loadings = principal_axes(&cov);
        let product = loadings * loadings.transpose();

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product[(i, j)] - expected).abs() < 1e-9,
                    "rows not orthonormal at ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_sample_covariance_known_population() {
        // Two samples varying only on the first axis
        let samples = [0.0f32, 0.5, 0.5, 1.0, 0.5, 0.5];
        let (mean, cov) = sample_covariance(&samples);

        assert!((mean[0] - 0.5).abs() < 1e-9);
        assert!((mean[1] - 0.5).abs() < 1e-9);
        assert!((cov[(0, 0)] - 0.5).abs() < 1e-9);
        assert!(cov[(1, 1)].abs() < 1e-9);
        assert!(cov[(2, 2)].abs() < 1e-9);
    }
}
