mod tables;

pub use self::tables::{
    clears as print_clears, leaderboard as print_leaderboard, player as print_player,
    players as print_players,
};

use passrank::RankResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Dumps `value` as pretty JSON when an output path was given.
pub fn write_json<T: Serialize + ?Sized>(path: Option<&Path>, value: &T) -> RankResult<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    info!("💾 Wrote {}", path.display());
    Ok(())
}
