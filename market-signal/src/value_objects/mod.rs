mod sentiment_score;
mod snapshot;

pub use sentiment_score::SentimentScore;
pub use snapshot::{MarketSnapshot, SnapshotError, SnapshotInput, field};
