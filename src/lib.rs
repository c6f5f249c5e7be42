pub mod config;
pub mod consts;
pub mod dataset;
pub mod difficulty;
pub mod error;
pub mod scorer;
pub mod search;

pub use crate::error::{RankError, RankResult};
pub use crate::search::Leaderboards;
