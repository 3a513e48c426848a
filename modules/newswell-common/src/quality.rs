//! Thresholds and weights for population quality scoring.

/// Minimum stories before the newsroom counts as populated.
pub const MIN_STORY_COUNT: usize = 25;

/// Minimum distinct categories represented.
pub const MIN_CATEGORY_DIVERSITY: usize = 4;

/// Minimum distinct locations represented.
pub const MIN_LOCATION_DIVERSITY: usize = 5;

/// Minimum mean community validation score (0-5 scale).
pub const MIN_AVG_VALIDATION_SCORE: f32 = 4.0;

/// Score weighting: each component contributes up to its weight, scaled by
/// progress toward the target and clamped at 1.0. Weights sum to 100.
pub const STORY_COUNT_WEIGHT: f32 = 25.0;
pub const CATEGORY_WEIGHT: f32 = 20.0;
pub const LOCATION_WEIGHT: f32 = 20.0;
pub const VALIDATION_WEIGHT: f32 = 25.0;
pub const VOICES_WEIGHT: f32 = 10.0;

/// Targets the weighted components scale against. Category and location
/// targets sit above the validity minimums so a bare-minimum population
/// doesn't score full marks.
pub const STORY_COUNT_TARGET: f32 = 25.0;
pub const CATEGORY_TARGET: f32 = 5.0;
pub const LOCATION_TARGET: f32 = 8.0;
pub const VALIDATION_TARGET: f32 = 5.0;
pub const VOICES_TARGET: f32 = 100.0;
