use crate::reports;
use clap::Args;
use passrank::search::ProfileOptions;
use passrank::{Leaderboards, RankResult};
use std::path::Path;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct PlayerArgs {
    pub name: String,

    /// Count 12K clears only.
    #[arg(long, default_value_t = false)]
    pub twelve_k_only: bool,

    /// Leave the clear list out of the profile.
    #[arg(long, default_value_t = false)]
    pub hide_clears: bool,
}

/// Unknown and banned players print nothing and leave no output file.
pub fn run(args: &PlayerArgs, boards: &Leaderboards, output: Option<&Path>) -> RankResult<()> {
    let opts = ProfileOptions {
        twelve_k_only: args.twelve_k_only,
        include_clears: !args.hide_clears,
    };
    let Some(summary) = boards.search_by_player(&args.name, &opts) else {
        warn!("No profile for {}", args.name);
        return Ok(());
    };
    reports::print_player(&summary);
    reports::write_json(output, &summary)
}
