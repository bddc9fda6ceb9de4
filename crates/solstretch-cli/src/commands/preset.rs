//! Preset management commands.

use std::path::PathBuf;

use solstretch_core::models::Preset;
use solstretch_core::presets::{load_preset, save_preset};

/// Write a preset file holding the default parameters.
pub fn cmd_preset_init(path: PathBuf) -> Result<(), String> {
    if path.exists() {
        return Err(format!("Refusing to overwrite {}", path.display()));
    }

    save_preset(&Preset::default(), &path)?;
    println!("Wrote default preset to {}", path.display());
    Ok(())
}

/// Print the resolved parameters of a preset file.
pub fn cmd_preset_show(path: PathBuf) -> Result<(), String> {
    let preset = load_preset(&path)?;

    println!("Preset: {}", path.display());
    println!("  blur_sigma:      {}", preset.enhance.blur_sigma);
    println!("  low_percentile:  {}", preset.enhance.low_percentile);
    println!("  high_percentile: {}", preset.enhance.high_percentile);
    println!("  clip_limit:      {}", preset.enhance.clip_limit);
    println!("  tile_grid:       {}", preset.enhance.tile_grid.as_str());
    println!("  gamma:           {}", preset.enhance.gamma);
    println!("  brightness:      {}", preset.adjust.brightness);
    println!("  contrast:        {}", preset.adjust.contrast);
    println!(
        "  gains (r,g,b):   {}, {}, {}",
        preset.adjust.r_gain, preset.adjust.g_gain, preset.adjust.b_gain
    );

    Ok(())
}
