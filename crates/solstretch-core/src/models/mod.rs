//! Parameter models for the enhancement pipeline.

mod defaults;
mod enums;


use serde::{Deserialize, Serialize};

use crate::pipeline::EnhanceError;

pub(crate) use defaults::{
    default_blur_sigma, default_clip_limit, default_high_percentile, default_low_percentile,
    default_one, default_zero,
};

pub use enums::{OutputFormat, TileGrid};

/// Parameters for the four-stage enhancement pipeline.
///
/// Constructed once per invocation from UI or CLI state and passed by
/// value; the pipeline itself holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhanceOptions {
    /// Standard deviation of the background-estimation Gaussian blur (0-50)
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: f32,

    /// Low clip percentile for the decorrelation stretch (0-20)
    #[serde(default = "default_low_percentile")]
    pub low_percentile: f32,

    /// High clip percentile for the decorrelation stretch (80-100)
    #[serde(default = "default_high_percentile")]
    pub high_percentile: f32,

    /// Contrast clip limit for local equalization (1.0-5.0)
    #[serde(default = "default_clip_limit")]
    pub clip_limit: f32,

    /// Tile grid for local equalization
    #[serde(default)]
    pub tile_grid: TileGrid,

    /// Tone-correction exponent (0.5-2.0, 1.0 = identity)
    #[serde(default = "default_one")]
    pub gamma: f32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            blur_sigma: default_blur_sigma(),
            low_percentile: default_low_percentile(),
            high_percentile: default_high_percentile(),
            clip_limit: default_clip_limit(),
            tile_grid: TileGrid::default(),
            gamma: default_one(),
        }
    }
}

impl EnhanceOptions {
    /// Validate the bundle before any pixel work.
    ///
    /// Rejects inverted percentile bounds and non-positive or non-finite
    /// gamma/clip-limit values so failures surface before computation.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(EnhanceError::invalid_parameter(
                "blur_sigma",
                format!("must be finite and >= 0, got {}", self.blur_sigma),
            ));
        }
        if !self.low_percentile.is_finite() || !self.high_percentile.is_finite() {
            return Err(EnhanceError::invalid_parameter(
                "percentiles",
                format!(
                    "must be finite, got low={} high={}",
                    self.low_percentile, self.high_percentile
                ),
            ));
        }
        if self.low_percentile < 0.0
            || self.high_percentile > 100.0
            || self.low_percentile >= self.high_percentile
        {
            return Err(EnhanceError::invalid_parameter(
                "percentiles",
                format!(
                    "require 0 <= low < high <= 100, got low={} high={}",
                    self.low_percentile, self.high_percentile
                ),
            ));
        }
        if !self.clip_limit.is_finite() || self.clip_limit <= 0.0 {
            return Err(EnhanceError::invalid_parameter(
                "clip_limit",
                format!("must be finite and > 0, got {}", self.clip_limit),
            ));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(EnhanceError::invalid_parameter(
                "gamma",
                format!("must be finite and > 0, got {}", self.gamma),
            ));
        }
        Ok(())
    }
}

/// Post-pipeline linear adjustments applied by the caller.
///
/// Order matters: brightness offset, then contrast about the 127.5 pivot,
/// then per-channel gain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustOptions {
    /// Additive brightness (-100 to 100, 0 = identity)
    #[serde(default = "default_zero")]
    pub brightness: f32,

    /// Multiplicative contrast about mid-gray (0.1-3.0, 1.0 = identity)
    #[serde(default = "default_one")]
    pub contrast: f32,

    /// Red channel gain (0-2.0, 1.0 = identity)
    #[serde(default = "default_one")]
    pub r_gain: f32,

    /// Green channel gain (0-2.0, 1.0 = identity)
    #[serde(default = "default_one")]
    pub g_gain: f32,

    /// Blue channel gain (0-2.0, 1.0 = identity)
    #[serde(default = "default_one")]
    pub b_gain: f32,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            brightness: default_zero(),
            contrast: default_one(),
            r_gain: default_one(),
            g_gain: default_one(),
            b_gain: default_one(),
        }
    }
}

impl AdjustOptions {
    /// Validate the adjustment bundle.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        if !self.brightness.is_finite() {
            return Err(EnhanceError::invalid_parameter(
                "brightness",
                format!("must be finite, got {}", self.brightness),
            ));
        }
        if !self.contrast.is_finite() || self.contrast <= 0.0 {
            return Err(EnhanceError::invalid_parameter(
                "contrast",
                format!("must be finite and > 0, got {}", self.contrast),
            ));
        }
        for (gain, name) in [
            (self.r_gain, "r_gain"),
            (self.g_gain, "g_gain"),
            (self.b_gain, "b_gain"),
        ] {
            if !gain.is_finite() || gain < 0.0 {
                return Err(EnhanceError::invalid_parameter(
                    name,
                    format!("must be finite and >= 0, got {}", gain),
                ));
            }
        }
        Ok(())
    }
}

/// A named parameter bundle, persisted as YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default)]
    pub enhance: EnhanceOptions,

    #[serde(default)]
    pub adjust: AdjustOptions,
}
