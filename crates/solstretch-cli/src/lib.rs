//! Shared utilities for solstretch-cli
//!
//! Reusable argument parsing, option building, and batch processing helpers
//! kept out of `main.rs` so they stay testable.

pub mod builders;
pub mod parsers;
pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use builders::build_preset;
pub use parsers::{parse_output_format, parse_tile_grid};
pub use processing::{
    determine_output_path, expand_inputs, process_single_image, SUPPORTED_EXTENSIONS,
};
pub use types::{EnhanceArgs, ProcessingParams};
