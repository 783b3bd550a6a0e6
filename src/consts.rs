/// Number of judgement tiers in a tally.
pub const TIER_COUNT: usize = 7;

/// Legacy difficulty code marking a Desert-Bus level.
pub const DESERT_BUS_DIFF_CODE: i64 = 64;

/// Minimum raw score awarded on a Desert-Bus level.
pub const DESERT_BUS_SCORE_FLOOR: f64 = 1.0;

/// Miss multiplier applied once more when the pass was played without holds.
pub const NO_HOLD_TAP_FACTOR: f64 = 0.9;

/// Miss multiplier granted to a pass with zero early doubles.
pub const ZERO_MISS_BONUS: f64 = 1.1;

// === Miss penalty curve ===

/// Tiles per tolerated miss.
pub const TOLERANCE_RATIO: u32 = 315;
pub const REGIME_START: f64 = 1.0;
pub const REGIME_END: f64 = 50.0;
/// Percent deducted at the start of the penalty regime.
pub const DEDUC_START: f64 = 10.0;
/// Percent deducted at (and past) the end of the penalty regime.
pub const DEDUC_END: f64 = 50.0;
pub const CURVE_POWER: f64 = 0.7;

// === Accuracy curve ===

/// Multiplier for a perfect 100% accuracy.
pub const PERFECT_ACCURACY_MULTIPLIER: f64 = 6.0;

/// Decimal places kept by display-mode accuracy.
pub const DISPLAY_ACCURACY_DIGITS: i32 = 4;
