//! Market Signal
//!
//! Shared kernel for the price predictor: validated OHLCV snapshots and the
//! keyword/momentum sentiment heuristic fed to the prediction model.

pub mod sentiment;
pub mod value_objects;

// Re-export value objects at crate root for convenience
pub use value_objects::{MarketSnapshot, SentimentScore, SnapshotError, SnapshotInput, field};

// Re-export sentiment scoring at crate root
pub use sentiment::{
    FixedRandom, RandomSource, SeededRandom, SentimentAnalysis, ThreadRandom, analyze, score,
};
