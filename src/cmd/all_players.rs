use crate::reports;
use clap::Args;
use passrank::search::AllPlayersOptions;
use passrank::{Leaderboards, RankResult};
use std::path::Path;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AllPlayersArgs {
    /// Primary ranking attribute, e.g. rankedScore, avgXacc, WFPasses.
    #[arg(short, long, default_value = "rankedScore")]
    pub sort_by: String,

    #[arg(long, default_value_t = false)]
    pub twelve_k_only: bool,

    /// Embed every player's clears in the JSON output.
    #[arg(long, default_value_t = false)]
    pub show_clears: bool,

    /// Descending order.
    #[arg(short, long, default_value_t = false)]
    pub reverse: bool,

    /// Rows printed to the terminal; the JSON output is never truncated.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: &AllPlayersArgs, boards: &Leaderboards, output: Option<&Path>) -> RankResult<()> {
    let opts = AllPlayersOptions {
        twelve_k_only: args.twelve_k_only,
        include_clears: args.show_clears,
        reverse: args.reverse,
    };

    let start = Instant::now();
    let board = boards.all_players_by(&args.sort_by, &opts)?;
    info!("⏱️  Ranked in {:.2?}", start.elapsed());

    reports::print_players(&board, args.limit);
    reports::write_json(output, &board)
}
