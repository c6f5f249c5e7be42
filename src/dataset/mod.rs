pub mod index;
pub mod loader;
pub mod records;

pub use self::index::ChartIndex;
pub use self::records::{ChartId, ChartRecord, Judgements, PassId, PassRecord, PlayerRecord};

use crate::error::{RankError, RankResult};
use std::collections::HashMap;

/// One immutable snapshot of charts, passes and players.
///
/// Lookup tables are built once here; queries never mutate the snapshot.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    charts: Vec<ChartRecord>,
    passes: Vec<PassRecord>,
    players: Vec<PlayerRecord>,
    chart_index: ChartIndex,
    player_index: HashMap<String, usize>,
    passes_by_chart: HashMap<ChartId, Vec<usize>>,
    passes_by_player: HashMap<String, Vec<usize>>,
}

impl Dataset {
    pub fn new(
        charts: Vec<ChartRecord>,
        passes: Vec<PassRecord>,
        players: Vec<PlayerRecord>,
    ) -> Self {
        let chart_index = ChartIndex::build(&charts);

        let mut player_index = HashMap::with_capacity(players.len());
        for (pos, player) in players.iter().enumerate() {
            player_index.entry(player.name.clone()).or_insert(pos);
        }

        let mut passes_by_chart: HashMap<ChartId, Vec<usize>> = HashMap::new();
        let mut passes_by_player: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, pass) in passes.iter().enumerate() {
            if let Some(chart_id) = pass.chart_ref() {
                passes_by_chart.entry(chart_id).or_default().push(pos);
            }
            passes_by_player
                .entry(pass.player.clone())
                .or_default()
                .push(pos);
        }

        Self {
            charts,
            passes,
            players,
            chart_index,
            player_index,
            passes_by_chart,
            passes_by_player,
        }
    }

    pub fn charts(&self) -> &[ChartRecord] {
        &self.charts
    }

    pub fn passes(&self) -> &[PassRecord] {
        &self.passes
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn chart(&self, id: ChartId) -> RankResult<&ChartRecord> {
        let pos = self.chart_index.position(id)?;
        Ok(&self.charts[pos])
    }

    pub fn player(&self, name: &str) -> RankResult<&PlayerRecord> {
        self.player_index
            .get(name)
            .map(|&pos| &self.players[pos])
            .ok_or_else(|| RankError::PlayerNotFound(name.to_string()))
    }

    /// Passes targeting `chart_id`, in ingestion order.
    pub fn passes_for_chart(&self, chart_id: ChartId) -> impl Iterator<Item = &PassRecord> {
        self.passes_by_chart
            .get(&chart_id)
            .into_iter()
            .flatten()
            .map(move |&pos| &self.passes[pos])
    }

    pub fn passes_for_player<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a PassRecord> + 'a {
        self.passes_by_player
            .get(name)
            .into_iter()
            .flatten()
            .map(move |&pos| &self.passes[pos])
    }
}
