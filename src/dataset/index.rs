use super::records::{ChartId, ChartRecord};
use crate::error::{RankError, RankResult};
use std::collections::HashMap;
use tracing::warn;

/// Direct `id -> position` lookup over the chart collection.
///
/// Snapshot order only loosely follows chart ids, so positions are never
/// guessed from the id itself.
#[derive(Debug, Clone, Default)]
pub struct ChartIndex {
    positions: HashMap<ChartId, usize>,
}

impl ChartIndex {
    pub fn build(charts: &[ChartRecord]) -> Self {
        let mut positions = HashMap::with_capacity(charts.len());
        for (pos, chart) in charts.iter().enumerate() {
            if positions.contains_key(&chart.id) {
                warn!("Duplicate chart id {} at position {}, keeping first", chart.id, pos);
                continue;
            }
            positions.insert(chart.id, pos);
        }
        Self { positions }
    }

    pub fn position(&self, id: ChartId) -> RankResult<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(RankError::ChartNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
