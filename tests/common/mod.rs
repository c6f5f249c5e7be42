#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use passrank::config::EngineConfig;
use passrank::dataset::{loader, Dataset};
use passrank::Leaderboards;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

// Four charts: 3 is the legacy special mode, 4 is only cleared by carol and
// the banned dave.
pub const CHARTS_JSON: &str = r#"{
  "count": 4,
  "results": [
    {"id": 1, "song": "Alpha", "artist": "Aster", "pguDiff": "U7", "pdnDiff": 20.0, "diff": 20, "baseScore": 1600, "creator": "x"},
    {"id": 2, "song": "Beta", "artist": "Borealis", "pguDiff": "G13", "pdnDiff": 15.0, "diff": 15, "baseScore": 500},
    {"id": 3, "song": "Gamma", "artist": "Cygnus", "pguDiff": "U10", "pdnDiff": 22.5, "diff": 64, "baseScore": 2000},
    {"id": 4, "song": "Delta", "artist": "Draco", "pguDiff": "P5", "pdnDiff": 5.0, "diff": 5, "baseScore": 100}
  ]
}"#;

pub const PASSES_JSON: &str = r#"{
  "count": 10,
  "results": [
    {"id": 10, "levelId": 1, "player": "alice", "speed": 1.0, "judgements": [15,0,0,2000,0,0,0], "is12K": false, "isNoHoldTap": false, "vidUploadTime": "2023-01-05T00:00:00Z", "vidLink": "https://v/10"},
    {"id": 11, "levelId": 1, "player": "bob", "speed": null, "judgements": [0,0,0,1000,0,0,0], "is12K": false, "isNoHoldTap": false, "vidUploadTime": "2023-01-03T00:00:00Z", "vidLink": "https://v/11"},
    {"id": 12, "levelId": 1, "player": "alice", "speed": 1.0, "judgements": [50,0,0,2000,0,0,0], "is12K": false, "isNoHoldTap": false, "vidUploadTime": "2023-01-10T00:00:00Z", "vidLink": "https://v/12"},
    {"id": 13, "levelId": 2, "player": "alice", "speed": 1.0, "judgements": [0,0,0,300,0,0,0], "is12K": true, "isNoHoldTap": false, "vidUploadTime": "2023-02-01T00:00:00Z", "vidLink": "https://v/13"},
    {"id": 14, "levelId": 2, "player": "carol", "speed": 1.0, "judgements": [5,0,10,300,10,0,0], "is12K": false, "isNoHoldTap": false, "vidUploadTime": "2023-01-20T00:00:00Z", "vidLink": "https://v/14"},
    {"id": 15, "levelId": 3, "player": "bob", "speed": 1.5, "judgements": ["-","-","-","-","-","-","-"], "is12K": false, "isNoHoldTap": false, "vidLink": "https://v/15"},
    {"id": 16, "levelId": 99, "player": "carol", "speed": 1.0, "judgements": [0,0,0,10,0,0,0], "is12K": false, "isNoHoldTap": false, "vidUploadTime": "2023-03-01T00:00:00Z", "vidLink": ""},
    {"id": 17, "levelId": 0, "player": "alice", "speed": 1.0, "judgements": [0,0,0,10,0,0,0], "is12K": false, "isNoHoldTap": false, "vidUploadTime": "2023-03-01T00:00:00Z", "vidLink": ""},
    {"id": 18, "levelId": 4, "player": "dave", "speed": 0, "judgements": [0,0,0,50,0,0,0], "is12K": false, "isNoHoldTap": false, "vidUploadTime": "2022-12-01T00:00:00Z", "vidLink": "https://v/18"},
    {"id": 19, "levelId": 4, "player": "carol", "speed": 2.0, "judgements": [1,0,0,100,0,0,0], "is12K": true, "isNoHoldTap": false, "vidUploadTime": "not-a-date", "vidLink": "https://v/19"}
  ]
}"#;

pub const PLAYERS_JSON: &str = r#"{
  "alice": {"country": "KR", "isBanned": false},
  "bob": {"country": "US", "isBanned": false},
  "carol": {"country": "JP", "isBanned": false},
  "dave": {"country": "CN", "isBanned": true},
  "erin": {"country": "DE", "isBanned": false}
}"#;

/// Score of pass 11: perfect, no misses, 1600 × 10 × 1.1.
pub const BOB_ALPHA: f64 = 17600.0;
/// Score of pass 13: perfect 12K clear, 500 × 10 × 1.1.
pub const ALICE_BETA: f64 = 5500.0;

pub fn snapshot_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn dataset() -> Dataset {
    let charts = loader::load_charts(Cursor::new(CHARTS_JSON)).unwrap();
    let passes = loader::load_passes(Cursor::new(PASSES_JSON)).unwrap();
    let players = loader::load_players(Cursor::new(PLAYERS_JSON)).unwrap();
    Dataset::new(charts, passes, players)
}

pub fn boards(data: &Dataset) -> Leaderboards<'_> {
    Leaderboards::new(data, EngineConfig::default()).with_snapshot_time(snapshot_time())
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}

/// Writes the fixture snapshot into `dir` and returns the three paths.
pub fn write_snapshot(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let charts = dir.join("charts.json");
    let passes = dir.join("passes.json");
    let players = dir.join("players.json");
    fs::write(&charts, CHARTS_JSON).unwrap();
    fs::write(&passes, PASSES_JSON).unwrap();
    fs::write(&players, PLAYERS_JSON).unwrap();
    (charts, passes, players)
}
