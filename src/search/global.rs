use super::player::{PlayerSummary, ProfileOptions};
use super::sort::{self, ClearSortKey, PlayerSortKey};
use super::Leaderboards;
use crate::error::RankResult;
use crate::scorer::ComputedResult;
use rayon::prelude::*;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllPlayersOptions {
    pub twelve_k_only: bool,
    pub include_clears: bool,
    /// Descending instead of ascending.
    pub reverse: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllClearsOptions {
    pub min_score: f64,
    pub twelve_k_only: bool,
    pub reverse: bool,
}

impl<'d> Leaderboards<'d> {
    /// Every unbanned player with at least one counted clear, sorted by `key`.
    pub fn search_all_players(
        &self,
        key: PlayerSortKey,
        opts: &AllPlayersOptions,
    ) -> Vec<PlayerSummary> {
        let profile_opts = ProfileOptions {
            twelve_k_only: opts.twelve_k_only,
            include_clears: opts.include_clears,
        };

        let mut board: Vec<PlayerSummary> = self
            .data
            .players()
            .par_iter()
            .filter(|p| !p.is_banned)
            .filter_map(|p| self.profile(&p.name, &profile_opts).ok())
            .filter(|s| s.total_passes > 0)
            .collect();

        sort::sort_players(&mut board, key);
        if opts.reverse {
            board.reverse();
        }
        info!("Ranked {} players by {}", board.len(), key);
        board
    }

    /// Deduplicated clears of every listed player, filtered and sorted by `key`.
    pub fn search_all_clears(
        &self,
        key: ClearSortKey,
        opts: &AllClearsOptions,
    ) -> Vec<ComputedResult> {
        let players = self.search_all_players(
            PlayerSortKey::RankedScore,
            &AllPlayersOptions {
                include_clears: true,
                ..AllPlayersOptions::default()
            },
        );

        let mut clears: Vec<ComputedResult> = players
            .into_iter()
            .flat_map(|p| p.clears.unwrap_or_default())
            .filter(|c| c.score >= opts.min_score)
            .filter(|c| !opts.twelve_k_only || c.is_12k)
            .collect();

        sort::sort_clears(&mut clears, key);
        if opts.reverse {
            clears.reverse();
        }
        info!("Collected {} clears sorted by {}", clears.len(), key);
        clears
    }

    /// Parses `key` first; an unknown key fails before any player is scored.
    pub fn all_players_by(
        &self,
        key: &str,
        opts: &AllPlayersOptions,
    ) -> RankResult<Vec<PlayerSummary>> {
        let key = PlayerSortKey::parse(key)?;
        Ok(self.search_all_players(key, opts))
    }

    pub fn all_clears_by(
        &self,
        key: &str,
        opts: &AllClearsOptions,
    ) -> RankResult<Vec<ComputedResult>> {
        let key = ClearSortKey::parse(key)?;
        Ok(self.search_all_clears(key, opts))
    }
}
