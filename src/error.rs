use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Chart {0} not found")]
    ChartNotFound(u32),

    #[error("Player '{0}' not found")]
    PlayerNotFound(String),

    #[error("Player '{0}' is banned")]
    PlayerBanned(String),

    #[error("Invalid sort option '{key}'. Valid options are: {}", valid.join(", "))]
    InvalidSortKey { key: String, valid: Vec<String> },
}

pub type RankResult<T> = Result<T, RankError>;
