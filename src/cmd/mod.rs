pub mod all_clears;
pub mod all_players;
pub mod chart;
pub mod player;
