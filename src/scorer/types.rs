use crate::dataset::{ChartId, Judgements, PassId};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Upload timestamp of a pass, or the snapshot time when none could be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadDate {
    Recorded(NaiveDateTime),
    Fallback(NaiveDateTime),
}

impl UploadDate {
    const FORMATS: [&'static str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

    /// Reads the part before the first `Z`; anything unreadable falls back
    /// to `fallback`.
    pub fn resolve(raw: Option<&str>, fallback: NaiveDateTime) -> Self {
        let Some(raw) = raw else {
            return UploadDate::Fallback(fallback);
        };
        let trimmed = raw.split('Z').next().unwrap_or_default().trim();
        Self::FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map_or(UploadDate::Fallback(fallback), UploadDate::Recorded)
    }

    pub fn value(&self) -> NaiveDateTime {
        match *self {
            UploadDate::Recorded(d) | UploadDate::Fallback(d) => d,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, UploadDate::Fallback(_))
    }
}

/// One scored submission, denormalised with its chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedResult {
    pub player: String,
    pub song: String,
    pub artist: String,
    pub score: f64,
    pub pgu_diff: String,
    #[serde(rename = "Xacc")]
    pub accuracy: f64,
    pub speed: f64,
    pub is_worlds_first: bool,
    pub vid_link: String,
    pub date: NaiveDateTime,
    pub date_is_fallback: bool,
    #[serde(rename = "is12K")]
    pub is_12k: bool,
    pub is_no_hold: bool,
    pub judgements: Judgements,
    pub pdn_diff: f64,
    pub chart_id: ChartId,
    pub pass_id: PassId,
    pub base_score: f64,
}

/// Per-player score totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBuckets {
    pub general: f64,
    /// Scores of 100% accuracy clears.
    pub perfect: f64,
    /// Chart base scores of world's-first clears.
    pub world_first: f64,
    pub twelve_k: f64,
}
