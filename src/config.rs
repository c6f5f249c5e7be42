use crate::consts::{DEFAULT_ACCURACY_WINDOW, DEFAULT_RANKED_TOP_N};
use crate::error::{RankError, RankResult};
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub paths: DatasetPaths,
    #[command(flatten)]
    pub engine: EngineConfig,
}

/// Locations of the cached snapshot files.
#[derive(Args, Debug, Clone)]
pub struct DatasetPaths {
    #[arg(global = true, long, default_value = "charts.json")]
    pub charts: String,
    #[arg(global = true, long, default_value = "passes.json")]
    pub passes: String,
    #[arg(global = true, long, default_value = "players.json")]
    pub players: String,
}

#[derive(Args, Debug, Clone)]
pub struct EngineConfig {
    /// Number of best clears weighted into the ranked score.
    #[arg(global = true, long, default_value_t = DEFAULT_RANKED_TOP_N)]
    pub ranked_top_n: usize,
    /// Number of best clears averaged into a player's accuracy.
    #[arg(global = true, long, default_value_t = DEFAULT_ACCURACY_WINDOW)]
    pub accuracy_window: usize,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            charts: "charts.json".to_string(),
            passes: "passes.json".to_string(),
            players: "players.json".to_string(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ranked_top_n: DEFAULT_RANKED_TOP_N,
            accuracy_window: DEFAULT_ACCURACY_WINDOW,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> RankResult<()> {
        if self.ranked_top_n == 0 {
            return Err(RankError::Config("--ranked-top-n must be at least 1".to_string()));
        }
        if self.accuracy_window == 0 {
            return Err(RankError::Config(
                "--accuracy-window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
