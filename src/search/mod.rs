pub mod chart;
pub mod global;
pub mod player;
pub mod sort;
pub mod world_first;

pub use self::global::{AllClearsOptions, AllPlayersOptions};
pub use self::player::{PlayerSummary, ProfileOptions};
pub use self::sort::{ClearSortKey, PlayerSortKey};
pub use self::world_first::WorldFirstResolver;

use crate::config::EngineConfig;
use crate::dataset::{ChartRecord, Dataset, PassRecord};
use crate::scorer::{self, ComputedResult, UploadDate};
use chrono::{NaiveDateTime, Utc};

/// Query engine over one dataset snapshot.
///
/// Owns the world's-first memo, so a new snapshot needs a new `Leaderboards`
/// (or a `reset_cache`).
pub struct Leaderboards<'d> {
    data: &'d Dataset,
    config: EngineConfig,
    snapshot_time: NaiveDateTime,
    world_firsts: WorldFirstResolver,
}

impl<'d> Leaderboards<'d> {
    pub fn new(data: &'d Dataset, config: EngineConfig) -> Self {
        Self {
            data,
            config,
            snapshot_time: Utc::now().naive_utc(),
            world_firsts: WorldFirstResolver::new(),
        }
    }

    /// Pins the time used for submissions without a readable upload date.
    pub fn with_snapshot_time(mut self, time: NaiveDateTime) -> Self {
        self.snapshot_time = time;
        self
    }

    pub fn with_resolver(mut self, resolver: WorldFirstResolver) -> Self {
        self.world_firsts = resolver;
        self
    }

    pub fn dataset(&self) -> &'d Dataset {
        self.data
    }

    pub fn snapshot_time(&self) -> NaiveDateTime {
        self.snapshot_time
    }

    pub fn resolver(&self) -> &WorldFirstResolver {
        &self.world_firsts
    }

    pub fn reset_cache(&mut self) {
        self.world_firsts.reset();
    }

    pub(crate) fn compute_result(
        &self,
        pass: &PassRecord,
        chart: &ChartRecord,
        is_worlds_first: bool,
    ) -> ComputedResult {
        let date = UploadDate::resolve(pass.vid_upload_time.as_deref(), self.snapshot_time);
        ComputedResult {
            player: pass.player.clone(),
            song: chart.song.clone(),
            artist: chart.artist.clone(),
            score: scorer::score_v2(pass, chart),
            pgu_diff: chart.pgu_diff.clone(),
            accuracy: scorer::accuracy(&pass.judgements),
            speed: pass.speed(),
            is_worlds_first,
            vid_link: pass.vid_link.clone(),
            date: date.value(),
            date_is_fallback: date.is_fallback(),
            is_12k: pass.is_12k,
            is_no_hold: pass.is_no_hold_tap,
            judgements: pass.judgements,
            pdn_diff: chart.pdn_diff,
            chart_id: chart.id,
            pass_id: pass.id,
            base_score: chart.base_score,
        }
    }
}

/// Descending by score; the sort is stable so equal scores keep input order.
pub(crate) fn sort_by_score_desc(results: &mut [ComputedResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}
