use super::curves::{accuracy, accuracy_multiplier, miss_taper_multiplier, speed_multiplier};
use crate::consts::{NO_HOLD_TAP_PENALTY, SPECIAL_MIN_SCORE};
use crate::dataset::{ChartRecord, PassRecord};

/// Legacy score: chart base score scaled by accuracy and speed.
pub fn base_score(pass: &PassRecord, chart: &ChartRecord) -> f64 {
    let acc_mtp = accuracy_multiplier(accuracy(&pass.judgements));
    let special = chart.is_special_mode();
    let speed_mtp = speed_multiplier(pass.speed(), special);
    let score = chart.base_score * acc_mtp * speed_mtp;

    if special {
        score.max(SPECIAL_MIN_SCORE)
    } else {
        score
    }
}

/// Canonical score: legacy score with the miss taper and the no-hold-tap
/// penalty applied. Uncountable judgements skip the taper.
pub fn score_v2(pass: &PassRecord, chart: &ChartRecord) -> f64 {
    let base = base_score(pass, chart);

    let mut mtp = match (pass.judgements.counts(), pass.judgements.tile_count()) {
        (Some(counts), Some(tiles)) => miss_taper_multiplier(tiles, counts),
        _ => 1.0,
    };
    if pass.is_no_hold_tap {
        mtp *= NO_HOLD_TAP_PENALTY;
    }
    base * mtp
}
