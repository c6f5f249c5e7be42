use crate::consts::*;
use crate::dataset::Judgements;

/// Weighted hit accuracy in `[0, 1]`.
///
/// Uncountable judgement data yields `SENTINEL_ACCURACY`. A sequence with no
/// hits at all yields `0.0`.
pub fn accuracy(judgements: &Judgements) -> f64 {
    let Some(c) = judgements.counts() else {
        return SENTINEL_ACCURACY;
    };
    let total: u64 = c.iter().map(|&v| v as u64).sum();
    if total == 0 {
        return 0.0;
    }
    let f = |i: usize| c[i] as f64;
    let weighted = f(3) * WEIGHT_PERFECT
        + (f(2) + f(4)) * WEIGHT_NEAR
        + (f(1) + f(5)) * WEIGHT_MID
        + (f(0) + f(6)) * WEIGHT_FAR;
    weighted / total as f64
}

/// Score multiplier for an accuracy fraction. Flat below 95%, a curve rising
/// towards (but never reaching) the perfect multiplier, then a jump at 100%.
pub fn accuracy_multiplier(acc: f64) -> f64 {
    let pct = acc * 100.0;
    if pct < ACC_CURVE_START_PCT {
        return 1.0;
    }
    if pct < 100.0 {
        return ACC_CURVE_NUMERATOR / (acc - ACC_CURVE_POLE) + ACC_CURVE_OFFSET;
    }
    ACC_PERFECT_MULTIPLIER
}

/// Speed multiplier. `special` selects the legacy-64 family, which falls back
/// to the normal family for slowed-down plays. Above 2x the special family goes
/// negative; `engine::base_score` floors the result.
pub fn speed_multiplier(speed: f64, special: bool) -> f64 {
    if special {
        if speed == 1.0 {
            return 1.0;
        }
        if speed > 1.0 {
            return 2.0 - speed;
        }
    }

    if speed == 1.0 {
        1.0
    } else if speed < 1.0 {
        0.0
    } else if speed < SPEED_RAMP_END {
        4.5 - 3.5 * speed
    } else if speed < SPEED_PLATEAU_END {
        SPEED_PLATEAU
    } else if speed < SPEED_CAP {
        0.7 * speed - 0.4
    } else {
        1.0
    }
}

/// Miss penalty, forgiving one miss per `TILE_DENSITY` tiles.
///
/// Regions over adjusted misses `am`: `0` full credit, `(0, 1]` flat plateau,
/// `(1, mid]` power ramp down, `(mid, 50]` mirrored power ramp, `> 50` floor.
pub fn miss_taper_multiplier(tile_count: u64, counts: &[u32; 7]) -> f64 {
    let misses = counts[0] as u64;
    if misses == 0 {
        return NO_MISS_BONUS;
    }

    let mid = (TAPER_START + TAPER_END) / 2.0;
    let mid_deduction = (TAPER_START_DEDUCTION + TAPER_END_DEDUCTION) / 2.0;
    let am = misses.saturating_sub(tile_count / TILE_DENSITY) as f64;

    if am <= 0.0 {
        1.0
    } else if am <= TAPER_START {
        1.0 - TAPER_START_DEDUCTION / 100.0
    } else if am <= mid {
        let k = ((am - TAPER_START) / (mid - TAPER_START)).powf(TAPER_EXPONENT)
            * (mid_deduction - TAPER_START_DEDUCTION)
            / 100.0;
        1.0 - TAPER_START_DEDUCTION / 100.0 - k
    } else if am <= TAPER_END {
        let k = ((TAPER_END - am) / (TAPER_END - mid)).powf(TAPER_EXPONENT)
            * (TAPER_END_DEDUCTION - mid_deduction)
            / 100.0;
        1.0 + k - TAPER_END_DEDUCTION / 100.0
    } else {
        1.0 - TAPER_END_DEDUCTION / 100.0
    }
}
