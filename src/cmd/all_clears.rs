use crate::reports;
use clap::Args;
use passrank::search::AllClearsOptions;
use passrank::{Leaderboards, RankResult};
use std::path::Path;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AllClearsArgs {
    /// Primary ranking attribute: score, Xacc, pdnDiff or date.
    #[arg(short, long, default_value = "score")]
    pub sort_by: String,

    /// Drop clears scoring below this.
    #[arg(short, long, default_value_t = 0.0)]
    pub min_score: f64,

    #[arg(long, default_value_t = false)]
    pub twelve_k_only: bool,

    /// Descending order.
    #[arg(short, long, default_value_t = false)]
    pub reverse: bool,

    /// Rows printed to the terminal; the JSON output is never truncated.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: &AllClearsArgs, boards: &Leaderboards, output: Option<&Path>) -> RankResult<()> {
    let opts = AllClearsOptions {
        min_score: args.min_score,
        twelve_k_only: args.twelve_k_only,
        reverse: args.reverse,
    };

    let start = Instant::now();
    let clears = boards.all_clears_by(&args.sort_by, &opts)?;
    info!("⏱️  Collected in {:.2?}", start.elapsed());

    reports::print_clears(&clears, args.limit);
    reports::write_json(output, &clears)
}
