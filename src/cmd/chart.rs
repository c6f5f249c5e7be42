use crate::reports;
use clap::Args;
use passrank::dataset::ChartId;
use passrank::{Leaderboards, RankResult};
use std::path::Path;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Chart id as listed in the snapshot.
    pub id: ChartId,
}

pub fn run(args: &ChartArgs, boards: &Leaderboards, output: Option<&Path>) -> RankResult<()> {
    let results = boards.search_by_chart(args.id);
    if results.is_empty() {
        warn!("No clears found for chart {}", args.id);
    }

    let title = match boards.dataset().chart(args.id) {
        Ok(chart) => format!("{} - {} ({})", chart.artist, chart.song, chart.pgu_diff),
        Err(_) => format!("Chart {}", args.id),
    };
    reports::print_leaderboard(&title, &results);
    reports::write_json(output, &results)
}
