use super::player::PlayerSummary;
use crate::error::{RankError, RankResult};
use crate::scorer::ComputedResult;
use std::cmp::Ordering;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Player ranking attributes, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum PlayerSortKey {
    #[strum(serialize = "rankedScore")]
    RankedScore,
    #[strum(serialize = "generalScore")]
    GeneralScore,
    #[strum(serialize = "universalPasses")]
    UniversalPasses,
    #[strum(serialize = "avgXacc")]
    AvgAccuracy,
    #[strum(serialize = "ppScore")]
    PerfectScore,
    #[strum(serialize = "wfScore")]
    WorldFirstScore,
    #[strum(serialize = "12kScore")]
    TwelveKScore,
    #[strum(serialize = "WFPasses")]
    WorldFirstPasses,
    #[strum(serialize = "totalPasses")]
    TotalPasses,
    #[strum(serialize = "topDiff")]
    TopDiff,
    #[strum(serialize = "top12kDiff")]
    Top12kDiff,
    #[strum(serialize = "player")]
    Player,
}

/// Clear ranking attributes, in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum ClearSortKey {
    #[strum(serialize = "score")]
    Score,
    #[strum(serialize = "Xacc")]
    Accuracy,
    #[strum(serialize = "pdnDiff")]
    PdnDiff,
    #[strum(serialize = "date")]
    Date,
}

/// Rejects unknown keys with the list of accepted names.
fn parse_key<K>(raw: &str) -> RankResult<K>
where
    K: FromStr + IntoEnumIterator + ToString,
{
    K::from_str(raw).map_err(|_| RankError::InvalidSortKey {
        key: raw.to_string(),
        valid: K::iter().map(|k| k.to_string()).collect(),
    })
}

/// `primary` first, then every other key in declaration order.
fn criteria<K: IntoEnumIterator + PartialEq + Copy>(primary: K) -> Vec<K> {
    std::iter::once(primary)
        .chain(K::iter().filter(|&k| k != primary))
        .collect()
}

impl PlayerSortKey {
    pub fn parse(raw: &str) -> RankResult<Self> {
        parse_key(raw)
    }

    pub fn compare(self, a: &PlayerSummary, b: &PlayerSummary) -> Ordering {
        match self {
            Self::RankedScore => a.ranked_score.total_cmp(&b.ranked_score),
            Self::GeneralScore => a.general_score.total_cmp(&b.general_score),
            Self::UniversalPasses => a.universal_passes.cmp(&b.universal_passes),
            Self::AvgAccuracy => a.avg_accuracy.total_cmp(&b.avg_accuracy),
            Self::PerfectScore => a.pp_score.total_cmp(&b.pp_score),
            Self::WorldFirstScore => a.wf_score.total_cmp(&b.wf_score),
            Self::TwelveKScore => a.twelve_k_score.total_cmp(&b.twelve_k_score),
            Self::WorldFirstPasses => a.wf_passes.cmp(&b.wf_passes),
            Self::TotalPasses => a.total_passes.cmp(&b.total_passes),
            Self::TopDiff => a.top_diff.cmp(&b.top_diff),
            Self::Top12kDiff => a.top_12k_diff.cmp(&b.top_12k_diff),
            Self::Player => a.player.cmp(&b.player),
        }
    }
}

impl ClearSortKey {
    pub fn parse(raw: &str) -> RankResult<Self> {
        parse_key(raw)
    }

    pub fn compare(self, a: &ComputedResult, b: &ComputedResult) -> Ordering {
        match self {
            Self::Score => a.score.total_cmp(&b.score),
            Self::Accuracy => a.accuracy.total_cmp(&b.accuracy),
            Self::PdnDiff => a.pdn_diff.total_cmp(&b.pdn_diff),
            Self::Date => a.date.cmp(&b.date),
        }
    }
}

/// Ascending by `primary`, ties resolved by the remaining keys.
pub fn sort_players(board: &mut [PlayerSummary], primary: PlayerSortKey) {
    let keys = criteria(primary);
    board.sort_by(|a, b| {
        keys.iter()
            .map(|k| k.compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Ascending by `primary`, ties resolved by the remaining keys.
pub fn sort_clears(clears: &mut [ComputedResult], primary: ClearSortKey) {
    let keys = criteria(primary);
    clears.sort_by(|a, b| {
        keys.iter()
            .map(|k| k.compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}
