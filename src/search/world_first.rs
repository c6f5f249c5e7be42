use crate::dataset::{ChartId, PassId};
use crate::scorer::ComputedResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::debug;

type DatedList = Arc<[ComputedResult]>;

/// Memo of date-ordered results per chart; the head of each list is the
/// chart's world's-first clear.
///
/// Entries are built at most once per chart id, also under concurrent use,
/// and stay valid only for the dataset snapshot they were built from.
#[derive(Debug, Default)]
pub struct WorldFirstResolver {
    memo: Mutex<HashMap<ChartId, Arc<OnceLock<DatedList>>>>,
}

impl WorldFirstResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoised list for `chart_id`, running `build` on first use.
    /// `build` must return results already in date order.
    pub fn dated_results<F>(&self, chart_id: ChartId, build: F) -> DatedList
    where
        F: FnOnce() -> Vec<ComputedResult>,
    {
        let slot = {
            let mut memo = self.memo.lock().unwrap_or_else(PoisonError::into_inner);
            memo.entry(chart_id).or_default().clone()
        };
        slot.get_or_init(|| {
            debug!("Resolving first clear of chart {}", chart_id);
            build().into()
        })
        .clone()
    }

    pub fn first_clear<F>(&self, chart_id: ChartId, build: F) -> Option<ComputedResult>
    where
        F: FnOnce() -> Vec<ComputedResult>,
    {
        self.dated_results(chart_id, build).first().cloned()
    }

    pub fn is_worlds_first<F>(&self, chart_id: ChartId, pass_id: PassId, build: F) -> bool
    where
        F: FnOnce() -> Vec<ComputedResult>,
    {
        self.dated_results(chart_id, build)
            .first()
            .is_some_and(|r| r.pass_id == pass_id)
    }

    pub fn cached_charts(&self) -> usize {
        self.memo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Drops every memoised chart. Call after loading a new snapshot.
    pub fn reset(&mut self) {
        self.memo
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
