//! Builders that merge preset files with command-line overrides.

use solstretch_core::models::Preset;
use solstretch_core::presets::load_preset;

use crate::parsers::parse_tile_grid;
use crate::types::EnhanceArgs;

/// Build the parameter bundle for an enhance run.
///
/// Starts from the built-in defaults, layers a preset file over them when
/// one is given, then applies any explicit command-line overrides. The
/// merged bundle is validated before it is returned, so bad parameter
/// combinations fail before any image is touched.
pub fn build_preset(args: &EnhanceArgs) -> Result<Preset, String> {
    let mut preset = match &args.preset {
        Some(path) => load_preset(path)?,
        None => Preset::default(),
    };

    if let Some(blur_sigma) = args.blur_sigma {
        preset.enhance.blur_sigma = blur_sigma;
    }
    if let Some(low) = args.low_percentile {
        preset.enhance.low_percentile = low;
    }
    if let Some(high) = args.high_percentile {
        preset.enhance.high_percentile = high;
    }
    if let Some(clip_limit) = args.clip_limit {
        preset.enhance.clip_limit = clip_limit;
    }
    if let Some(grid_str) = &args.tile_grid {
        preset.enhance.tile_grid = parse_tile_grid(grid_str)?;
    }
    if let Some(gamma) = args.gamma {
        preset.enhance.gamma = gamma;
    }

    if let Some(brightness) = args.brightness {
        preset.adjust.brightness = brightness;
    }
    if let Some(contrast) = args.contrast {
        preset.adjust.contrast = contrast;
    }
    if let Some(r_gain) = args.r_gain {
        preset.adjust.r_gain = r_gain;
    }
    if let Some(g_gain) = args.g_gain {
        preset.adjust.g_gain = g_gain;
    }
    if let Some(b_gain) = args.b_gain {
        preset.adjust.b_gain = b_gain;
    }

    preset.enhance.validate().map_err(|e| e.to_string())?;
    preset.adjust.validate().map_err(|e| e.to_string())?;

    Ok(preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solstretch_core::models::TileGrid;

    #[test]
    fn test_defaults_when_nothing_given() {
        let preset = build_preset(&EnhanceArgs::default()).unwrap();
        assert_eq!(preset, Preset::default());
    }

    #[test]
    fn test_cli_overrides_apply() {
        let args = EnhanceArgs {
            gamma: Some(1.5),
            tile_grid: Some("16x16".to_string()),
            r_gain: Some(1.2),
            ..Default::default()
        };
        let preset = build_preset(&args).unwrap();
        assert_eq!(preset.enhance.gamma, 1.5);
        assert_eq!(preset.enhance.tile_grid, TileGrid::Grid16);
        assert_eq!(preset.adjust.r_gain, 1.2);
        // Untouched fields stay at their defaults
        assert_eq!(preset.enhance.blur_sigma, 25.0);
    }

    #[test]
    fn test_invalid_merge_is_rejected() {
        let args = EnhanceArgs {
            low_percentile: Some(90.0),
            high_percentile: Some(10.0),
            ..Default::default()
        };
        assert!(build_preset(&args).is_err());

        let args = EnhanceArgs {
            tile_grid: Some("5x5".to_string()),
            ..Default::default()
        };
        assert!(build_preset(&args).is_err());
    }

    #[test]
    fn test_cli_overrides_layer_over_preset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("base.yml");
        std::fs::write(&path, "enhance:\n  gamma: 1.8\n  blur_sigma: 10.0\n").unwrap();

        let args = EnhanceArgs {
            preset: Some(path),
            gamma: Some(0.8),
            ..Default::default()
        };
        let preset = build_preset(&args).unwrap();
        assert_eq!(preset.enhance.gamma, 0.8);
        assert_eq!(preset.enhance.blur_sigma, 10.0);
    }
}
