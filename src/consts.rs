//! Tuned game-balance constants. The curves in `scorer::curves` depend on the
//! exact values below; do not re-derive them.

/// Accuracy returned when a judgement sequence cannot be counted.
pub const SENTINEL_ACCURACY: f64 = 0.95;

// Judgement bucket weights, outermost pair to perfect.
pub const WEIGHT_PERFECT: f64 = 1.0;
pub const WEIGHT_NEAR: f64 = 0.75;
pub const WEIGHT_MID: f64 = 0.4;
pub const WEIGHT_FAR: f64 = 0.2;

/// Accuracy percentage below which no multiplier bonus applies.
pub const ACC_CURVE_START_PCT: f64 = 95.0;
pub const ACC_CURVE_POLE: f64 = 1.0054;
pub const ACC_CURVE_NUMERATOR: f64 = -0.027;
pub const ACC_CURVE_OFFSET: f64 = 0.513;
pub const ACC_PERFECT_MULTIPLIER: f64 = 10.0;

/// Legacy difficulty value that selects the special scoring branch.
pub const SPECIAL_LEGACY_DIFF: f64 = 64.0;
pub const SPECIAL_MIN_SCORE: f64 = 1.0;

// Normal speed curve.
pub const SPEED_RAMP_END: f64 = 1.1;
pub const SPEED_PLATEAU_END: f64 = 1.5;
pub const SPEED_CAP: f64 = 2.0;
pub const SPEED_PLATEAU: f64 = 0.65;

/// Tiles per forgiven miss.
pub const TILE_DENSITY: u64 = 315;
pub const NO_MISS_BONUS: f64 = 1.1;
pub const TAPER_START: f64 = 1.0;
pub const TAPER_END: f64 = 50.0;
/// Percent deducted at `TAPER_START` and at `TAPER_END`.
pub const TAPER_START_DEDUCTION: f64 = 10.0;
pub const TAPER_END_DEDUCTION: f64 = 50.0;
pub const TAPER_EXPONENT: f64 = 0.7;

pub const NO_HOLD_TAP_PENALTY: f64 = 0.9;

pub const RANKED_DECAY: f64 = 0.9;
pub const DEFAULT_RANKED_TOP_N: usize = 20;
pub const DEFAULT_ACCURACY_WINDOW: usize = 20;
