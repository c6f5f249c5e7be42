use crate::consts::SPECIAL_LEGACY_DIFF;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub type ChartId = u32;
pub type PassId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub id: ChartId,
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub artist: String,
    /// Tier/rung label, e.g. "U7".
    #[serde(rename = "pguDiff", default)]
    pub pgu_diff: String,
    #[serde(rename = "pdnDiff", default, deserialize_with = "lenient_f64")]
    pub pdn_diff: f64,
    /// Legacy numeric difficulty.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub diff: f64,
    #[serde(rename = "baseScore", default, deserialize_with = "lenient_f64")]
    pub base_score: f64,
}

impl ChartRecord {
    pub fn is_special_mode(&self) -> bool {
        self.diff == SPECIAL_LEGACY_DIFF
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassRecord {
    pub id: PassId,
    #[serde(rename = "levelId", default)]
    pub level_id: Option<ChartId>,
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub judgements: Judgements,
    #[serde(rename = "is12K", default)]
    pub is_12k: bool,
    #[serde(rename = "isNoHoldTap", default)]
    pub is_no_hold_tap: bool,
    #[serde(rename = "vidUploadTime", default)]
    pub vid_upload_time: Option<String>,
    #[serde(rename = "vidLink", default)]
    pub vid_link: String,
}

impl PassRecord {
    /// Effective speed factor; absent or zero means normal speed.
    pub fn speed(&self) -> f64 {
        match self.speed {
            Some(s) if s != 0.0 => s,
            _ => 1.0,
        }
    }

    /// Chart reference, `None` when the submission points nowhere.
    pub fn chart_ref(&self) -> Option<ChartId> {
        self.level_id.filter(|&id| id != 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "isBanned", default)]
    pub is_banned: bool,
}

/// Seven timing buckets, `[worst .. perfect .. worst]`, index 3 is perfect.
///
/// Anything that is not exactly seven non-negative integers in the snapshot
/// (sentinel strings, floats, nulls, wrong length) becomes `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Judgements {
    Counted([u32; 7]),
    #[default]
    Unavailable,
}

impl Judgements {
    pub fn counts(&self) -> Option<&[u32; 7]> {
        match self {
            Judgements::Counted(c) => Some(c),
            Judgements::Unavailable => None,
        }
    }

    /// Tiles hit in the five inner buckets.
    pub fn tile_count(&self) -> Option<u64> {
        self.counts()
            .map(|c| c[1..6].iter().map(|&v| v as u64).sum())
    }

    fn from_value(value: &Value) -> Self {
        let Some(items) = value.as_array() else {
            return Judgements::Unavailable;
        };
        if items.len() != 7 {
            return Judgements::Unavailable;
        }
        let mut counts = [0u32; 7];
        for (slot, item) in counts.iter_mut().zip(items) {
            match item.as_u64().and_then(|v| u32::try_from(v).ok()) {
                Some(v) => *slot = v,
                None => return Judgements::Unavailable,
            }
        }
        Judgements::Counted(counts)
    }
}

impl<'de> Deserialize<'de> for Judgements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Judgements::from_value(&value))
    }
}

impl Serialize for Judgements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Judgements::Counted(c) => c.serialize(serializer),
            Judgements::Unavailable => serializer.serialize_none(),
        }
    }
}

// Snapshot numbers occasionally arrive as strings or null.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
