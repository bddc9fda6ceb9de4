//! Contrast-limited adaptive histogram equalization on luminance
//!
//! Tile-wise histogram equalization of the LAB lightness channel with
//! bin-amplification clipping; the chroma channels pass through untouched.
//! Follows the OpenCV algorithm: per-tile 256-bin histograms, clipping with
//! excess redistribution, CDF lookup tables, and bilinear interpolation
//! between the four surrounding tile LUTs.

use super::{EnhanceError, RgbImage};
use crate::color::{lab_to_rgb, linear_to_srgb, rgb_to_lab, srgb_to_linear, Lab};
use crate::models::TileGrid;

const HIST_BINS: usize = 256;

/// Equalize local contrast in the luminance channel.
///
/// The image is converted to CIELAB and the L channel quantized to 8 bits
/// (L*255/100). `tile_grid` partitions the plane into equal tiles whose
/// histograms are clipped at `clip_limit` times the uniform bin height
/// before equalization. Dimensions not divisible by the grid are extended by
/// mirroring (without repeating the edge row) for LUT computation only.
///
/// A luminance plane with zero dynamic range has nothing to equalize and
/// returns the input unchanged.
pub fn equalize_local_contrast(
    image: &RgbImage,
    clip_limit: f32,
    tile_grid: TileGrid,
) -> Result<RgbImage, EnhanceError> {
    if !clip_limit.is_finite() || clip_limit <= 0.0 {
        return Err(EnhanceError::invalid_parameter(
            "clip_limit",
            format!("must be finite and > 0, got {}", clip_limit),
        ));
    }

    if image.data.is_empty() {
        return Ok(image.clone());
    }

    let width = image.width as usize;
    let height = image.height as usize;
    let grid = tile_grid.tiles();

    // Split into an 8-bit luminance plane and full-precision chroma
    let mut plane = Vec::with_capacity(width * height);
    let mut chroma = Vec::with_capacity(width * height * 2);
    for pixel in image.data.chunks_exact(3) {
        let lab = rgb_to_lab(
            srgb_to_linear(pixel[0] as f32 / 255.0),
            srgb_to_linear(pixel[1] as f32 / 255.0),
            srgb_to_linear(pixel[2] as f32 / 255.0),
        );
        plane.push((lab.l * 255.0 / 100.0).clamp(0.0, 255.0).round() as u8);
        chroma.push(lab.a);
        chroma.push(lab.b);
    }

    let min = plane.iter().min().copied().unwrap_or(0);
    let max = plane.iter().max().copied().unwrap_or(0);
    if min == max {
        // Single occupied bin; equalization is meaningless
        return Ok(image.clone());
    }

    // Extend the plane so both dimensions divide evenly into the grid
    let ext_width = width.div_ceil(grid) * grid;
    let ext_height = height.div_ceil(grid) * grid;
    let extended = if ext_width != width || ext_height != height {
        extend_mirrored(&plane, width, height, ext_width, ext_height)
    } else {
        plane.clone()
    };

    let tile_width = ext_width / grid;
    let tile_height = ext_height / grid;
    let luts = tile_luts(&extended, ext_width, grid, tile_width, tile_height, clip_limit);

    // Remap the luminance plane by bilinear interpolation between tile LUTs
    // and rebuild RGB with the original chroma
    let mut data = Vec::with_capacity(image.data.len());
    for y in 0..height {
        for x in 0..width {
            let value = plane[y * width + x];
            let equalized = interpolate_luts(&luts, grid, tile_width, tile_height, x, y, value);

            let lab = Lab {
                l: equalized * 100.0 / 255.0,
                a: chroma[(y * width + x) * 2],
                b: chroma[(y * width + x) * 2 + 1],
            };
            let (r, g, b) = lab_to_rgb(lab);
            data.push((linear_to_srgb(r).clamp(0.0, 1.0) * 255.0).round() as u8);
            data.push((linear_to_srgb(g).clamp(0.0, 1.0) * 255.0).round() as u8);
            data.push((linear_to_srgb(b).clamp(0.0, 1.0) * 255.0).round() as u8);
        }
    }

    Ok(RgbImage {
        width: image.width,
        height: image.height,
        data,
    })
}

/// Mirror a coordinate into [0, max) without repeating the edge sample.
#[inline]
fn reflect(x: usize, max: usize) -> usize {
    if max <= 1 {
        return 0;
    }
    let period = 2 * max - 2;
    let r = x % period;
    if r >= max {
        period - r
    } else {
        r
    }
}

/// Extend a plane to `ext_width` x `ext_height` by mirrored borders.
fn extend_mirrored(
    plane: &[u8],
    width: usize,
    height: usize,
    ext_width: usize,
    ext_height: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; ext_width * ext_height];
    for y in 0..ext_height {
        let sy = reflect(y, height);
        for x in 0..ext_width {
            let sx = reflect(x, width);
            out[y * ext_width + x] = plane[sy * width + sx];
        }
    }
    out
}

/// Equalization LUT for every tile, row-major over the grid.
fn tile_luts(
    plane: &[u8],
    plane_width: usize,
    grid: usize,
    tile_width: usize,
    tile_height: usize,
    clip_limit: f32,
) -> Vec<[u8; HIST_BINS]> {
    let mut luts = Vec::with_capacity(grid * grid);
    for ty in 0..grid {
        for tx in 0..grid {
            luts.push(tile_lut(
                plane,
                plane_width,
                tx * tile_width,
                ty * tile_height,
                tile_width,
                tile_height,
                clip_limit,
            ));
        }
    }
    luts
}

/// LUT for one tile: histogram, clip with redistribution, CDF, rescale.
fn tile_lut(
    plane: &[u8],
    plane_width: usize,
    x0: usize,
    y0: usize,
    tile_width: usize,
    tile_height: usize,
    clip_limit: f32,
) -> [u8; HIST_BINS] {
    let tile_area = tile_width * tile_height;

    let mut hist = [0usize; HIST_BINS];
    for y in y0..y0 + tile_height {
        let row = &plane[y * plane_width + x0..y * plane_width + x0 + tile_width];
        for &value in row {
            hist[value as usize] += 1;
        }
    }

    // Clip bins above the limit and redistribute the excess uniformly
    let clip = ((clip_limit * tile_area as f32 / HIST_BINS as f32).max(1.0)).floor() as usize;
    let mut excess = 0usize;
    for bin in hist.iter_mut() {
        if *bin > clip {
            excess += *bin - clip;
            *bin = clip;
        }
    }

    let batch = excess / HIST_BINS;
    let mut residual = excess % HIST_BINS;
    for bin in hist.iter_mut() {
        *bin += batch;
    }
    if residual > 0 {
        let step = (HIST_BINS / residual).max(1);
        let mut i = 0;
        while i < HIST_BINS && residual > 0 {
            hist[i] += 1;
            residual -= 1;
            i += step;
        }
    }

    // Cumulative distribution rescaled to the output range
    let scale = 255.0 / tile_area as f32;
    let mut lut = [0u8; HIST_BINS];
    let mut cumulative = 0usize;
    for (i, &count) in hist.iter().enumerate() {
        cumulative += count;
        lut[i] = (cumulative as f32 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Remap one pixel through the four surrounding tile LUTs, bilinearly
/// weighted by its position within the tile lattice.
fn interpolate_luts(
    luts: &[[u8; HIST_BINS]],
    grid: usize,
    tile_width: usize,
    tile_height: usize,
    x: usize,
    y: usize,
    value: u8,
) -> f32 {
    let tyf = y as f32 / tile_height as f32 - 0.5;
    let ty0 = tyf.floor().max(0.0) as usize;
    let ty1 = (ty0 + 1).min(grid - 1);
    let wy = (tyf - tyf.floor()).clamp(0.0, 1.0);
    let wy = if tyf < 0.0 { 0.0 } else { wy };

    let txf = x as f32 / tile_width as f32 - 0.5;
    let tx0 = txf.floor().max(0.0) as usize;
    let tx1 = (tx0 + 1).min(grid - 1);
    let wx = (txf - txf.floor()).clamp(0.0, 1.0);
    let wx = if txf < 0.0 { 0.0 } else { wx };

    let v = value as usize;
    let top_left = luts[ty0 * grid + tx0][v] as f32;
    let top_right = luts[ty0 * grid + tx1][v] as f32;
    let bottom_left = luts[ty1 * grid + tx0][v] as f32;
    let bottom_right = luts[ty1 * grid + tx1][v] as f32;

    let top = top_left * (1.0 - wx) + top_right * wx;
    let bottom = bottom_left * (1.0 - wx) + bottom_right * wx;
    top * (1.0 - wy) + bottom * wy
}

#[cfg(test)]
mod lut_tests {
    use super::*;

    #[test]
    fn test_reflect_borders() {
        assert_eq!(reflect(0, 4), 0);
        assert_eq!(reflect(3, 4), 3);
        assert_eq!(reflect(4, 4), 2);
        assert_eq!(reflect(5, 4), 1);
        assert_eq!(reflect(0, 1), 0);
    }

    #[test]
    fn test_tile_lut_monotonic() {
        // Ramp tile: the LUT must be a monotone non-decreasing mapping
        let plane: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        let lut = tile_lut(&plane, 8, 0, 0, 8, 8, 2.0);
        for i in 1..HIST_BINS {
            assert!(lut[i] >= lut[i - 1]);
        }
        assert_eq!(lut[HIST_BINS - 1], 255);
    }

    #[test]
    fn test_clip_redistribution_conserves_counts() {
        // All pixels in one bin; after clipping, the CDF must still end at
        // the full tile area (LUT tops out at 255)
        let plane = vec![100u8; 64];
        let lut = tile_lut(&plane, 8, 0, 0, 8, 8, 2.0);
        assert_eq!(lut[HIST_BINS - 1], 255);
    }
}
