//! Preset management
//!
//! Load and save named parameter bundles as YAML files.

use std::path::Path;

use crate::models::Preset;

/// Validate a preset name to prevent path traversal attacks.
/// Rejects names containing path separators, "..", or other dangerous patterns.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }

    if name.contains('/') || name.contains('\\') {
        return Err("Preset name cannot contain path separators".to_string());
    }

    if name.contains("..") {
        return Err("Preset name cannot contain '..'".to_string());
    }

    if name.starts_with('.') {
        return Err("Preset name cannot start with '.'".to_string());
    }

    if name.contains('\0') {
        return Err("Preset name cannot contain null bytes".to_string());
    }

    Ok(())
}

/// Load a preset from a YAML file
pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<Preset, String> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read preset file: {}", e))?;

    serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse preset YAML: {}", e))
}

/// Save a preset to a YAML file
pub fn save_preset<P: AsRef<Path>>(preset: &Preset, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let yaml =
        serde_yaml::to_string(preset).map_err(|e| format!("Failed to serialize preset: {}", e))?;

    std::fs::write(path, yaml).map_err(|e| format!("Failed to write preset file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnhanceOptions, TileGrid};

    #[test]
    fn test_validate_preset_name() {
        assert!(validate_preset_name("lascaux-default").is_ok());
        assert!(validate_preset_name("high_contrast2").is_ok());

        assert!(validate_preset_name("").is_err());
        assert!(validate_preset_name("a/b").is_err());
        assert!(validate_preset_name("a\\b").is_err());
        assert!(validate_preset_name("..secret").is_err());
        assert!(validate_preset_name(".hidden").is_err());
        assert!(validate_preset_name("nul\0byte").is_err());
    }

    #[test]
    fn test_preset_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strong.yml");

        let preset = Preset {
            enhance: EnhanceOptions {
                blur_sigma: 35.0,
                tile_grid: TileGrid::Grid4,
                ..Default::default()
            },
            ..Default::default()
        };

        save_preset(&preset, &path).unwrap();
        let loaded = load_preset(&path).unwrap();
        assert_eq!(loaded, preset);
    }

    #[test]
    fn test_load_missing_preset_is_an_error() {
        let err = load_preset("missing/preset.yml").unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
