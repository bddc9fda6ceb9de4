//! Default value functions for serde.

/// Default background-blur sigma (25.0)
pub fn default_blur_sigma() -> f32 {
    25.0
}

/// Default low stretch percentile (1.0)
pub fn default_low_percentile() -> f32 {
    1.0
}

/// Default high stretch percentile (99.0)
pub fn default_high_percentile() -> f32 {
    99.0
}

/// Default contrast clip limit (2.0)
pub fn default_clip_limit() -> f32 {
    2.0
}

/// Default value of 1.0 for multipliers and gamma
pub fn default_one() -> f32 {
    1.0
}

/// Default value of 0.0 for offsets
pub fn default_zero() -> f32 {
    0.0
}
