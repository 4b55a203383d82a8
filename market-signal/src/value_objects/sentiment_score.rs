use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline sentiment in `[-1, 1]`, held at two decimal places
///
/// Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl SentimentScore {
    pub const NEUTRAL: SentimentScore = SentimentScore(Decimal::ZERO);
    pub const MAX: Decimal = Decimal::ONE;
    pub const MIN: Decimal = Decimal::NEGATIVE_ONE;
    pub const DECIMALS: u32 = 2;

    /// Clamp into `[-1, 1]` and round half-up to two decimals
    pub fn from_raw(value: Decimal) -> Self {
        SentimentScore(round_half_up(value.clamp(Self::MIN, Self::MAX)))
    }

    pub fn inner(&self) -> Decimal {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    pub fn is_neutral(&self) -> bool {
        self.0.is_zero()
    }
}

/// Rounds to [`SentimentScore::DECIMALS`] places, midpoints toward +inf
fn round_half_up(value: Decimal) -> Decimal {
    let scale = dec!(100);
    let rounded = ((value * scale) + dec!(0.5)).floor() / scale;
    rounded.round_dp(SentimentScore::DECIMALS)
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<SentimentScore> for Decimal {
    fn from(score: SentimentScore) -> Decimal {
        score.0
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
