//! Parsing functions for command-line parameter strings.

use std::str::FromStr;

use solstretch_core::models::{OutputFormat, TileGrid};

/// Parse a tile grid specification such as "8x8", "8×8", or "8".
pub fn parse_tile_grid(grid_str: &str) -> Result<TileGrid, String> {
    TileGrid::from_str(grid_str)
}

/// Parse an output format name ("jpeg" or "tiff").
pub fn parse_output_format(format_str: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(format_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tile_grid() {
        assert_eq!(parse_tile_grid("4x4").unwrap(), TileGrid::Grid4);
        assert_eq!(parse_tile_grid(" 8X8 ").unwrap(), TileGrid::Grid8);
        assert_eq!(parse_tile_grid("16×16").unwrap(), TileGrid::Grid16);
        assert!(parse_tile_grid("3x3").is_err());
        assert!(parse_tile_grid("8x16").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("jpeg").unwrap(), OutputFormat::Jpeg);
        assert_eq!(parse_output_format("tif").unwrap(), OutputFormat::Tiff);
        assert!(parse_output_format("webp").is_err());
    }
}
