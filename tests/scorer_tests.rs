mod common;

use common::assert_close;
use passrank::dataset::{ChartRecord, Judgements, PassRecord};
use passrank::scorer::{
    accuracy, accuracy_multiplier, aggregate_buckets, average_accuracy, base_score,
    miss_taper_multiplier, ranked_score, score_v2, speed_multiplier,
};
use rstest::rstest;

fn chart(base: f64, diff: f64) -> ChartRecord {
    ChartRecord {
        id: 1,
        song: "Song".to_string(),
        artist: "Artist".to_string(),
        pgu_diff: "U7".to_string(),
        pdn_diff: 20.0,
        diff,
        base_score: base,
    }
}

fn pass(speed: Option<f64>, judgements: Judgements) -> PassRecord {
    PassRecord {
        id: 1,
        level_id: Some(1),
        player: "p".to_string(),
        speed,
        judgements,
        is_12k: false,
        is_no_hold_tap: false,
        vid_upload_time: None,
        vid_link: String::new(),
    }
}

#[rstest]
#[case([0, 0, 0, 100, 0, 0, 0], 1.0)]
#[case([0, 0, 100, 0, 100, 0, 0], 0.75)]
#[case([0, 50, 0, 0, 0, 50, 0], 0.4)]
#[case([10, 0, 0, 0, 0, 0, 10], 0.2)]
#[case([15, 0, 0, 2000, 0, 0, 0], 0.994045)]
#[case([0, 0, 0, 0, 0, 0, 0], 0.0)]
fn accuracy_weights(#[case] counts: [u32; 7], #[case] expected: f64) {
    assert_close(accuracy(&Judgements::Counted(counts)), expected, 1e-6);
}

#[test]
fn unavailable_judgements_use_sentinel() {
    assert_eq!(accuracy(&Judgements::Unavailable), 0.95);
}

#[rstest]
#[case(0.5, 1.0)]
#[case(0.9499, 1.0)]
#[case(0.96, 1.107714)]
#[case(0.99404, 2.889761)]
#[case(1.0, 10.0)]
fn accuracy_multiplier_regions(#[case] acc: f64, #[case] expected: f64) {
    assert_close(accuracy_multiplier(acc), expected, 1e-5);
}

#[test]
fn accuracy_multiplier_is_continuous_at_curve_start() {
    let below = accuracy_multiplier(0.95 - 1e-9);
    let above = accuracy_multiplier(0.95 + 1e-9);
    assert_eq!(below, 1.0);
    assert_close(above, below, 1e-3);
    // The only jump is at 100%.
    assert_close(accuracy_multiplier(1.0 - 1e-9), 5.513, 1e-3);
    assert_eq!(accuracy_multiplier(1.0), 10.0);
}

#[test]
fn accuracy_multiplier_never_decreases() {
    let mut prev = 0.0;
    for i in 0..=1000 {
        let m = accuracy_multiplier(i as f64 / 1000.0);
        assert!(m >= prev, "dropped at {}", i);
        prev = m;
    }
}

#[rstest]
#[case(1.0, false, 1.0)]
#[case(0.9, false, 0.0)]
#[case(1.05, false, 0.825)]
#[case(1.2, false, 0.65)]
#[case(1.5, false, 0.65)]
#[case(1.8, false, 0.86)]
#[case(2.0, false, 1.0)]
#[case(3.0, false, 1.0)]
#[case(1.0, true, 1.0)]
#[case(1.5, true, 0.5)]
#[case(2.5, true, -0.5)]
#[case(0.8, true, 0.0)]
fn speed_curves(#[case] speed: f64, #[case] special: bool, #[case] expected: f64) {
    assert_close(speed_multiplier(speed, special), expected, 1e-9);
}

#[rstest]
#[case([0, 0, 0, 10, 0, 0, 0], 1.1)]
#[case([1, 0, 0, 10, 0, 0, 0], 0.9)]
#[case([15, 0, 0, 2000, 0, 0, 0], 0.808636)]
#[case([80, 0, 0, 10, 0, 0, 0], 0.5)]
fn miss_taper(#[case] counts: [u32; 7], #[case] expected: f64) {
    let tiles = counts[1..6].iter().map(|&v| v as u64).sum();
    assert_close(miss_taper_multiplier(tiles, &counts), expected, 1e-4);
}

#[test]
fn end_to_end_reference_clear() {
    let c = chart(1600.0, 20.0);
    let p = pass(Some(1.0), Judgements::Counted([15, 0, 0, 2000, 0, 0, 0]));

    assert_close(accuracy(&p.judgements), 0.99404, 1e-5);
    assert_close(base_score(&p, &c), 4624.9, 0.5);
    assert_close(score_v2(&p, &c), 3740.0, 1.0);
}

#[test]
fn no_hold_tap_costs_ten_percent() {
    let c = chart(1600.0, 20.0);
    let mut p = pass(None, Judgements::Counted([0, 0, 0, 500, 0, 0, 0]));
    let full = score_v2(&p, &c);
    p.is_no_hold_tap = true;
    assert_close(score_v2(&p, &c), full * 0.9, 1e-9);
}

#[test]
fn special_mode_is_floored_at_one() {
    let c = chart(2000.0, 64.0);
    let fast = pass(Some(3.0), Judgements::Counted([0, 0, 0, 100, 0, 0, 0]));
    assert_eq!(base_score(&fast, &c), 1.0);

    let slow = pass(Some(0.5), Judgements::Unavailable);
    assert_eq!(base_score(&slow, &c), 1.0);
}

#[test]
fn scores_are_never_negative() {
    let normal = chart(1600.0, 20.0);
    let special = chart(1600.0, 64.0);
    for speed in [0.5, 0.99, 1.0, 1.05, 1.3, 1.9, 2.5, 4.0] {
        for counts in [[0, 0, 0, 10, 0, 0, 0], [200, 5, 5, 10, 5, 5, 200]] {
            let p = pass(Some(speed), Judgements::Counted(counts));
            assert!(score_v2(&p, &normal) >= 0.0);
            assert!(score_v2(&p, &special) >= 0.5);
        }
    }
}

#[test]
fn unavailable_judgements_skip_the_taper() {
    let c = chart(1000.0, 20.0);
    let p = pass(None, Judgements::Unavailable);
    assert_close(score_v2(&p, &c), base_score(&p, &c), 1e-12);
}

#[rstest]
#[case(&[100.0], 100.0)]
#[case(&[100.0, 100.0], 190.0)]
#[case(&[300.0, 200.0, 100.0], 300.0 + 180.0 + 81.0)]
#[case(&[], 0.0)]
fn ranked_score_weights(#[case] scores: &[f64], #[case] expected: f64) {
    assert_close(ranked_score(scores, 20), expected, 1e-9);
}

#[test]
fn ranked_score_stops_at_top_n() {
    let scores = vec![10.0; 30];
    let expected: f64 = (0..20).map(|i| 10.0 * 0.9f64.powi(i)).sum();
    assert_close(ranked_score(&scores, 20), expected, 1e-9);
    assert_close(ranked_score(&scores, 1), 10.0, 1e-12);
}

#[test]
fn average_accuracy_uses_window() {
    let accs = [1.0, 0.9, 0.8, 0.1];
    assert_close(average_accuracy(&accs, 3), 0.9, 1e-12);
    assert_close(average_accuracy(&accs, 20), 0.7, 1e-12);
    assert_eq!(average_accuracy(&[], 20), 0.0);
}

#[test]
fn buckets_split_scores() {
    let data = common::dataset();
    let boards = common::boards(&data);
    let alpha = boards.search_by_chart(1);
    let buckets = aggregate_buckets(&alpha);

    assert_close(buckets.general, alpha.iter().map(|r| r.score).sum(), 1e-9);
    assert_close(buckets.perfect, common::BOB_ALPHA, 1e-6);
    assert_close(buckets.world_first, 1600.0, 1e-12);
    assert_eq!(buckets.twelve_k, 0.0);
}
