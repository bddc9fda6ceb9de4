//! Color space conversions
//!
//! CIE L*a*b* conversions (D65) and the sRGB transfer function. The
//! decorrelation stretch and the local contrast equalizer both operate in
//! LAB so that chroma is preserved while lightness is manipulated.

mod lab;
mod srgb;


pub use lab::{lab_to_rgb, rgb_to_lab, Lab};
pub use srgb::{linear_to_srgb, srgb_to_linear};
