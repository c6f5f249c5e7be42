use super::{sort_by_score_desc, Leaderboards};
use crate::dataset::{ChartId, PassRecord};
use crate::scorer::ComputedResult;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

impl<'d> Leaderboards<'d> {
    /// Best result per player on `chart_id`, highest score first.
    ///
    /// Empty when the chart does not resolve or has no passes.
    pub fn search_by_chart(&self, chart_id: ChartId) -> Vec<ComputedResult> {
        let mut results = self.score_chart(chart_id);
        if results.is_empty() {
            return results;
        }

        let first = self
            .world_firsts
            .first_clear(chart_id, || date_order(results.clone()))
            .map(|r| r.pass_id);
        for r in results.iter_mut() {
            r.is_worlds_first = Some(r.pass_id) == first;
        }

        sort_by_score_desc(&mut results);
        let mut seen = HashSet::new();
        results.retain(|r| seen.insert(r.player.clone()));
        results
    }

    /// Every result on `chart_id` in upload order, earliest first, with the
    /// world's-first flag on the head. Memoised per chart.
    pub fn dated_results(&self, chart_id: ChartId) -> Arc<[ComputedResult]> {
        self.world_firsts
            .dated_results(chart_id, || date_order(self.score_chart(chart_id)))
    }

    pub fn is_worlds_first(&self, pass: &PassRecord) -> bool {
        let Some(chart_id) = pass.chart_ref() else {
            return false;
        };
        self.world_firsts.is_worlds_first(chart_id, pass.id, || {
            date_order(self.score_chart(chart_id))
        })
    }

    /// Scores every pass on the chart in ingestion order, flags unset.
    fn score_chart(&self, chart_id: ChartId) -> Vec<ComputedResult> {
        let chart = match self.data.chart(chart_id) {
            Ok(chart) => chart,
            Err(e) => {
                debug!("{}", e);
                return Vec::new();
            }
        };
        self.data
            .passes_for_chart(chart_id)
            .map(|pass| self.compute_result(pass, chart, false))
            .collect()
    }
}

/// Stable sort by upload date so equal dates keep ingestion order; flags the
/// head as world's first.
fn date_order(mut results: Vec<ComputedResult>) -> Vec<ComputedResult> {
    results.sort_by(|a, b| a.date.cmp(&b.date));
    for (i, r) in results.iter_mut().enumerate() {
        r.is_worlds_first = i == 0;
    }
    results
}
