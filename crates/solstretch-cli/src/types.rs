//! Parameter types for CLI commands.

use std::path::PathBuf;

use solstretch_core::models::{OutputFormat, Preset};

/// Raw per-parameter overrides from the command line.
///
/// Every field is optional; unset fields fall back to the preset (when one
/// is given) or the built-in defaults. Collected into a struct so the
/// builder has one merge point instead of a dozen arguments.
#[derive(Debug, Clone, Default)]
pub struct EnhanceArgs {
    pub preset: Option<PathBuf>,
    pub blur_sigma: Option<f32>,
    pub low_percentile: Option<f32>,
    pub high_percentile: Option<f32>,
    pub clip_limit: Option<f32>,
    pub tile_grid: Option<String>,
    pub gamma: Option<f32>,
    pub brightness: Option<f32>,
    pub contrast: Option<f32>,
    pub r_gain: Option<f32>,
    pub g_gain: Option<f32>,
    pub b_gain: Option<f32>,
}

/// Resolved parameters for processing a single image.
#[derive(Clone)]
pub struct ProcessingParams {
    /// Fully merged parameter bundle
    pub preset: Preset,

    /// Output format
    pub export: OutputFormat,

    /// Suppress per-image output (set in batch mode)
    pub silent: bool,
}
