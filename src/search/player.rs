use super::{sort_by_score_desc, Leaderboards};
use crate::dataset::PassRecord;
use crate::difficulty::DifficultyLabel;
use crate::error::{RankError, RankResult};
use crate::scorer::{self, ComputedResult};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Only 12K clears count towards totals and the clear list.
    pub twelve_k_only: bool,
    /// Keep the deduplicated clears on the summary.
    pub include_clears: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            twelve_k_only: false,
            include_clears: true,
        }
    }
}

/// Aggregated standing of one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub player: String,
    pub ranked_score: f64,
    pub general_score: f64,
    pub pp_score: f64,
    pub wf_score: f64,
    #[serde(rename = "12kScore")]
    pub twelve_k_score: f64,
    #[serde(rename = "avgXacc")]
    pub avg_accuracy: f64,
    pub total_passes: usize,
    pub universal_passes: usize,
    #[serde(rename = "WFPasses")]
    pub wf_passes: usize,
    pub top_diff: DifficultyLabel,
    pub top_12k_diff: DifficultyLabel,
    pub country: String,
    #[serde(rename = "allScores", skip_serializing_if = "Option::is_none")]
    pub clears: Option<Vec<ComputedResult>>,
}

impl<'d> Leaderboards<'d> {
    /// Profile of `name`, or `None` when the player is unknown or banned.
    pub fn search_by_player(&self, name: &str, opts: &ProfileOptions) -> Option<PlayerSummary> {
        match self.profile(name, opts) {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Same as [`search_by_player`](Self::search_by_player) but keeps the
    /// reason a profile is unavailable.
    pub fn profile(&self, name: &str, opts: &ProfileOptions) -> RankResult<PlayerSummary> {
        let record = self.data.player(name)?;
        if record.is_banned {
            return Err(RankError::PlayerBanned(name.to_string()));
        }

        let mut top_diff = DifficultyLabel::default();
        let mut top_12k_diff = DifficultyLabel::default();
        let mut results = Vec::new();

        for pass in self.data.passes_for_player(name) {
            let Some(result) = self.score_pass(pass) else {
                continue;
            };
            if let Some(label) = DifficultyLabel::parse(&result.pgu_diff) {
                top_diff = top_diff.max(label);
                if result.is_12k {
                    top_12k_diff = top_12k_diff.max(label);
                }
            }
            results.push(result);
        }

        sort_by_score_desc(&mut results);
        let mut seen = HashSet::new();
        results.retain(|r| (!opts.twelve_k_only || r.is_12k) && seen.insert(r.chart_id));

        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        let accuracies: Vec<f64> = results.iter().map(|r| r.accuracy).collect();
        let buckets = scorer::aggregate_buckets(&results);

        let summary = PlayerSummary {
            player: record.name.clone(),
            ranked_score: scorer::ranked_score(&scores, self.config.ranked_top_n),
            general_score: buckets.general,
            pp_score: buckets.perfect,
            wf_score: buckets.world_first,
            twelve_k_score: buckets.twelve_k,
            avg_accuracy: scorer::average_accuracy(&accuracies, self.config.accuracy_window),
            total_passes: results.len(),
            universal_passes: results
                .iter()
                .filter(|r| DifficultyLabel::is_universal(&r.pgu_diff))
                .count(),
            wf_passes: results.iter().filter(|r| r.is_worlds_first).count(),
            top_diff,
            top_12k_diff,
            country: record.country.clone(),
            clears: opts.include_clears.then_some(results),
        };
        debug!(
            "Profiled {}: {} clears, ranked {:.2}",
            summary.player, summary.total_passes, summary.ranked_score
        );
        Ok(summary)
    }

    /// Scores a single submission against its chart. Passes without a chart
    /// reference are dropped quietly, broken references with a warning.
    fn score_pass(&self, pass: &PassRecord) -> Option<ComputedResult> {
        let chart_id = pass.chart_ref()?;
        let chart = match self.data.chart(chart_id) {
            Ok(chart) => chart,
            Err(e) => {
                warn!("Skipping pass {} by {}: {}", pass.id, pass.player, e);
                return None;
            }
        };
        Some(self.compute_result(pass, chart, self.is_worlds_first(pass)))
    }
}
