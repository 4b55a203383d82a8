//! Keyword lists driving the headline heuristic
//!
//! Matching is by substring on the lower-cased headline, so short stems such
//! as `up` or `low` also hit inside longer words.

pub const POSITIVE_WORDS: &[&str] = &[
    "bull",
    "bullish",
    "rise",
    "rising",
    "increase",
    "up",
    "gain",
    "gains",
    "growth",
    "positive",
    "surge",
    "rally",
    "boom",
    "breakthrough",
    "adoption",
    "institutional",
    "investment",
    "buy",
    "buying",
    "support",
    "strong",
    "record",
    "high",
    "milestone",
    "success",
    "approve",
    "approved",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bear",
    "bearish",
    "fall",
    "falling",
    "decrease",
    "down",
    "drop",
    "crash",
    "decline",
    "negative",
    "sell",
    "selling",
    "dump",
    "fear",
    "uncertainty",
    "regulation",
    "ban",
    "banned",
    "hack",
    "hacked",
    "scam",
    "fraud",
    "low",
    "bottom",
    "concern",
    "warning",
    "risk",
    "volatile",
    "bubble",
];

/// Boost the score only when the headline already reads positive
pub const CRYPTO_POSITIVE: &[&str] = &[
    "bitcoin",
    "btc",
    "cryptocurrency",
    "blockchain",
    "etf",
    "halving",
];

/// Penalized whenever present
pub const CRYPTO_NEGATIVE: &[&str] = &["regulation", "tax", "government", "central bank"];

/// Marker that flips the momentum bonus into a penalty
pub const VOLATILITY_MARKER: &str = "volatile";

/// Keywords from `list` contained in `text`, each reported at most once
pub fn matches(text: &str, list: &[&'static str]) -> Vec<&'static str> {
    list.iter().copied().filter(|w| text.contains(w)).collect()
}
