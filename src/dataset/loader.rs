use super::records::{ChartRecord, PassRecord, PlayerRecord};
use super::Dataset;
use crate::config::DatasetPaths;
use crate::error::{RankError, RankResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Wrapped { results: Vec<Value> },
    Bare(Vec<Value>),
}

impl Listing {
    fn into_items(self) -> Vec<Value> {
        match self {
            Listing::Wrapped { results } => results,
            Listing::Bare(items) => items,
        }
    }
}

#[derive(Deserialize)]
struct PlayerFields {
    #[serde(default)]
    country: String,
    #[serde(rename = "isBanned", default)]
    is_banned: bool,
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>, kind: &str) -> Vec<T> {
    let total = items.len();
    let mut out = Vec::with_capacity(total);
    let mut skipped = 0;

    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(rec) => out.push(rec),
            Err(e) => {
                skipped += 1;
                debug!("[{} #{}] skipped: {}", kind, idx, e);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} of {} invalid {} records", skipped, total, kind);
    }
    out
}

pub fn load_charts<R: Read>(reader: R) -> RankResult<Vec<ChartRecord>> {
    let listing: Listing = serde_json::from_reader(reader)?;
    Ok(decode_items(listing.into_items(), "chart"))
}

pub fn load_passes<R: Read>(reader: R) -> RankResult<Vec<PassRecord>> {
    let listing: Listing = serde_json::from_reader(reader)?;
    Ok(decode_items(listing.into_items(), "pass"))
}

/// Accepts the API listing (`results` with `name` fields) or the cached
/// name-keyed map. Map entries come back sorted by name.
pub fn load_players<R: Read>(reader: R) -> RankResult<Vec<PlayerRecord>> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(items) => Ok(decode_items(items, "player")),
        Value::Object(map) if map.get("results").is_some_and(Value::is_array) => {
            let listing: Listing = serde_json::from_value(Value::Object(map))?;
            Ok(decode_items(listing.into_items(), "player"))
        }
        Value::Object(map) => Ok(players_from_map(map)),
        _ => Err(RankError::Config(
            "players snapshot must be a list or a name-keyed object".to_string(),
        )),
    }
}

fn players_from_map(map: Map<String, Value>) -> Vec<PlayerRecord> {
    let mut players = Vec::with_capacity(map.len());
    for (name, fields) in map {
        match serde_json::from_value::<PlayerFields>(fields) {
            Ok(f) => players.push(PlayerRecord {
                name,
                country: f.country,
                is_banned: f.is_banned,
            }),
            Err(e) => warn!("Skipped player '{}': {}", name, e),
        }
    }
    players.sort_by(|a, b| a.name.cmp(&b.name));
    players
}

fn open<P: AsRef<Path>>(path: P) -> RankResult<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        RankError::Config(format!("Could not open snapshot '{}': {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

pub fn load_from_paths(paths: &DatasetPaths) -> RankResult<Dataset> {
    info!("Loading charts from {}", paths.charts);
    let charts = load_charts(open(&paths.charts)?)?;
    info!("Loading passes from {}", paths.passes);
    let passes = load_passes(open(&paths.passes)?)?;
    info!("Loading players from {}", paths.players);
    let players = load_players(open(&paths.players)?)?;

    info!(
        "Loaded {} charts, {} passes, {} players",
        charts.len(),
        passes.len(),
        players.len()
    );
    Ok(Dataset::new(charts, passes, players))
}
