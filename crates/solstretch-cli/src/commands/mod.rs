//! CLI command implementations.

mod enhance;
mod preset;

pub use enhance::cmd_enhance;
pub use preset::{cmd_preset_init, cmd_preset_show};
