use super::types::{ComputedResult, ScoreBuckets};
use crate::consts::RANKED_DECAY;

/// Geometrically weighted sum of the best `top_n` scores.
///
/// `sorted_desc` must already be in descending order.
pub fn ranked_score(sorted_desc: &[f64], top_n: usize) -> f64 {
    sorted_desc
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(rank, score)| RANKED_DECAY.powi(rank as i32) * score)
        .sum()
}

pub fn aggregate_buckets<'a, I>(results: I) -> ScoreBuckets
where
    I: IntoIterator<Item = &'a ComputedResult>,
{
    let mut buckets = ScoreBuckets::default();
    for r in results {
        buckets.general += r.score;
        if r.accuracy == 1.0 {
            buckets.perfect += r.score;
        }
        if r.is_worlds_first {
            buckets.world_first += r.base_score;
        }
        if r.is_12k {
            buckets.twelve_k += r.score;
        }
    }
    buckets
}

/// Mean of the first `window` values.
pub fn average_accuracy(sorted_by_score: &[f64], window: usize) -> f64 {
    let head = &sorted_by_score[..sorted_by_score.len().min(window)];
    if head.is_empty() {
        return 0.0;
    }
    head.iter().sum::<f64>() / head.len() as f64
}
