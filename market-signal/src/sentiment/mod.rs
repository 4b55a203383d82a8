//! Headline sentiment scoring
//!
//! Pure functions, no I/O. The only non-determinism (the tie-break on
//! saturated scores) comes from the [`RandomSource`] passed in.

mod engine;
pub mod keywords;
mod random;

pub use engine::{SentimentAnalysis, analyze, score};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
