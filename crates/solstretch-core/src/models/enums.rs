//! Enumerated parameter types.

use serde::{Deserialize, Serialize};

/// Tile grid for local contrast equalization.
///
/// Only square 4x4, 8x8, and 16x16 grids are supported; anything else is
/// rejected at parse time, before any computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileGrid {
    /// 4x4 tiles
    Grid4,
    /// 8x8 tiles
    #[default]
    Grid8,
    /// 16x16 tiles
    Grid16,
}

impl TileGrid {
    /// Number of tiles along each axis
    pub fn tiles(&self) -> usize {
        match self {
            Self::Grid4 => 4,
            Self::Grid8 => 8,
            Self::Grid16 => 16,
        }
    }

    /// Get the grid as a display string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Grid4 => "4x4",
            Self::Grid8 => "8x8",
            Self::Grid16 => "16x16",
        }
    }
}

impl std::str::FromStr for TileGrid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "4" | "4x4" | "4×4" => Ok(Self::Grid4),
            "8" | "8x8" | "8×8" => Ok(Self::Grid8),
            "16" | "16x16" | "16×16" => Ok(Self::Grid16),
            _ => Err(format!(
                "Unsupported tile grid: {} (expected 4x4, 8x8, or 16x16)",
                s
            )),
        }
    }
}

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// JPEG, quality 95
    Jpeg,
    /// 8-bit RGB TIFF
    Tiff,
}

impl OutputFormat {
    /// File extension for the format
    pub fn extension(&self) -> &str {
        match self {
            Self::Jpeg => "jpg",
            Self::Tiff => "tif",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "tif" | "tiff" => Ok(Self::Tiff),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
