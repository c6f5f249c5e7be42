pub mod aggregate;
pub mod curves;
pub mod engine;
pub mod types;

pub use self::aggregate::{aggregate_buckets, average_accuracy, ranked_score};
pub use self::curves::{accuracy, accuracy_multiplier, miss_taper_multiplier, speed_multiplier};
pub use self::engine::{base_score, score_v2};
pub use self::types::{ComputedResult, ScoreBuckets, UploadDate};
