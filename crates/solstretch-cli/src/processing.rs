//! Input expansion, output paths, and single-image processing.

use std::path::{Path, PathBuf};

use solstretch_core::models::OutputFormat;
use solstretch_core::{adjust_linear, decoders, enhance, exporters};

use crate::types::ProcessingParams;

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "tif", "tiff"];

/// Determine output path based on input, output dir, and export format
pub fn determine_output_path(
    input: &Path,
    out: &Option<PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf, String> {
    let extension = format.extension();

    if let Some(out_path) = out {
        // If out is a directory, use input filename with new extension
        if out_path.is_dir() {
            let filename = input
                .file_stem()
                .ok_or("Invalid input filename")?
                .to_string_lossy();
            Ok(out_path.join(format!("{}_enhanced.{}", filename, extension)))
        } else {
            // Use the specified path as-is
            Ok(out_path.clone())
        }
    } else {
        // Use input directory with modified filename
        let filename = input
            .file_stem()
            .ok_or("Invalid input filename")?
            .to_string_lossy();
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(format!("{}_enhanced.{}", filename, extension)))
    }
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files. If `recursive` is
/// true, subdirectories are also scanned.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() && recursive {
            collect_images_from_dir(&path, recursive, files)?;
        } else if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
    }

    Ok(())
}

/// Decode, enhance, adjust, and export a single image.
///
/// Returns the output path on success. Failures leave any previously
/// written outputs untouched.
pub fn process_single_image(
    input: &Path,
    output_path: &Path,
    params: &ProcessingParams,
) -> Result<PathBuf, String> {
    let decoded = decoders::decode_image(input)?;

    if !params.silent {
        println!(
            "Loaded {} ({}x{})",
            input.display(),
            decoded.width,
            decoded.height
        );
    }

    let enhanced = enhance(&decoded, &params.preset.enhance).map_err(|e| e.to_string())?;
    let adjusted = adjust_linear(&enhanced, &params.preset.adjust).map_err(|e| e.to_string())?;

    exporters::export_image(&adjusted, output_path, params.export)?;

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_output_path_default_sibling() {
        let path =
            determine_output_path(Path::new("/photos/panel.jpg"), &None, OutputFormat::Jpeg)
                .unwrap();
        assert_eq!(path, PathBuf::from("/photos/panel_enhanced.jpg"));
    }

    #[test]
    fn test_determine_output_path_explicit_file() {
        let out = Some(PathBuf::from("/tmp/result.tif"));
        let path =
            determine_output_path(Path::new("/photos/panel.jpg"), &out, OutputFormat::Tiff)
                .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/result.tif"));
    }

    #[test]
    fn test_determine_output_path_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = Some(dir.path().to_path_buf());
        let path =
            determine_output_path(Path::new("/photos/panel.jpg"), &out, OutputFormat::Tiff)
                .unwrap();
        assert_eq!(path, dir.path().join("panel_enhanced.tif"));
    }

    #[test]
    fn test_expand_inputs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.tiff", "notes.txt", "c.JPG"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("d.tif"), b"x").unwrap();

        let files = expand_inputs(&[dir.path().to_path_buf()], false).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.tiff", "b.jpg", "c.JPG"]);

        let files = expand_inputs(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_expand_inputs_missing_path() {
        assert!(expand_inputs(&[PathBuf::from("/no/such/place")], false).is_err());
    }
}
