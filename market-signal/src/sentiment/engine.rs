//! Headline sentiment heuristic
//!
//! Scores a headline against a market snapshot in a fixed sequence of
//! factors, accumulated into one running value:
//!
//! ```text
//! keywords      (p - n) * 0.2
//! momentum      range/open > 0.05  =>  +0.05, or -0.1 when "volatile"
//! volume        ±min(volume / 10000, 0.1), following the sign of p - n
//! crypto terms  +0.1 each when p > 0, -0.15 each for regulatory terms
//! clamp         [-1, 1], saturated values jittered by [0.85, 0.99)
//! round         two decimals, half-up
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;

use super::keywords::{
    CRYPTO_NEGATIVE, CRYPTO_POSITIVE, NEGATIVE_WORDS, POSITIVE_WORDS, VOLATILITY_MARKER, matches,
};
use super::random::RandomSource;
use crate::value_objects::{MarketSnapshot, SentimentScore};

const WORD_WEIGHT: Decimal = dec!(0.2);
const MOMENTUM_THRESHOLD: f64 = 0.05;
const MOMENTUM_BONUS: Decimal = dec!(0.05);
const VOLATILITY_PENALTY: Decimal = dec!(-0.1);
const VOLUME_DIVISOR: Decimal = dec!(10000);
const VOLUME_CAP: Decimal = dec!(0.1);
/// Volume at which `volume / VOLUME_DIVISOR` reaches `VOLUME_CAP`
const VOLUME_CAP_AT: f64 = 1000.0;
const CRYPTO_BONUS: Decimal = dec!(0.1);
const CRYPTO_PENALTY: Decimal = dec!(0.15);
const JITTER_MIN: Decimal = dec!(0.85);
const JITTER_SPAN: Decimal = dec!(0.14);

/// Score plus the signals that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentAnalysis {
    pub score: SentimentScore,
    pub positive_hits: Vec<&'static str>,
    pub negative_hits: Vec<&'static str>,
    pub crypto_positive_hits: Vec<&'static str>,
    pub crypto_negative_hits: Vec<&'static str>,
    pub relative_range: f64,
    pub volume_factor: Decimal,
    /// The clamped score hit ±1 and was scaled down by a random factor
    pub jittered: bool,
}

impl SentimentAnalysis {
    fn neutral(snapshot: &MarketSnapshot) -> Self {
        SentimentAnalysis {
            score: SentimentScore::NEUTRAL,
            positive_hits: Vec::new(),
            negative_hits: Vec::new(),
            crypto_positive_hits: Vec::new(),
            crypto_negative_hits: Vec::new(),
            relative_range: snapshot.relative_range(),
            volume_factor: Decimal::ZERO,
            jittered: false,
        }
    }
}

/// Score a headline against a snapshot
///
/// Total: every input yields a value in `[-1, 1]` with two decimals.
pub fn score(headline: &str, snapshot: &MarketSnapshot, random: &dyn RandomSource) -> SentimentScore {
    analyze(headline, snapshot, random).score
}

/// Same as [`score`], keeping the intermediate signals
pub fn analyze(
    headline: &str,
    snapshot: &MarketSnapshot,
    random: &dyn RandomSource,
) -> SentimentAnalysis {
    if headline.trim().is_empty() {
        return SentimentAnalysis::neutral(snapshot);
    }

    let text = headline.to_lowercase();
    let positive_hits = matches(&text, POSITIVE_WORDS);
    let negative_hits = matches(&text, NEGATIVE_WORDS);
    let p = positive_hits.len();
    let n = negative_hits.len();

    let mut raw = (Decimal::from(p) - Decimal::from(n)) * WORD_WEIGHT;

    let relative_range = snapshot.relative_range();
    if relative_range > MOMENTUM_THRESHOLD {
        raw += if text.contains(VOLATILITY_MARKER) {
            VOLATILITY_PENALTY
        } else {
            MOMENTUM_BONUS
        };
    }

    let volume_factor = volume_factor(snapshot.volume());
    if p > n {
        raw += volume_factor;
    } else if n > p {
        raw -= volume_factor;
    }

    let crypto_positive_hits = matches(&text, CRYPTO_POSITIVE);
    if p > 0 {
        raw += CRYPTO_BONUS * Decimal::from(crypto_positive_hits.len());
    }
    let crypto_negative_hits = matches(&text, CRYPTO_NEGATIVE);
    raw -= CRYPTO_PENALTY * Decimal::from(crypto_negative_hits.len());

    let mut clamped = raw.clamp(SentimentScore::MIN, SentimentScore::MAX);
    let jittered = clamped.abs() == Decimal::ONE;
    if jittered {
        clamped *= jitter_factor(random);
    }

    SentimentAnalysis {
        score: SentimentScore::from_raw(clamped),
        positive_hits,
        negative_hits,
        crypto_positive_hits,
        crypto_negative_hits,
        relative_range,
        volume_factor,
        jittered,
    }
}

/// `min(volume / 10000, 0.1)`, exact below the cap whatever the volume's magnitude
fn volume_factor(volume: f64) -> Decimal {
    if volume >= VOLUME_CAP_AT {
        return VOLUME_CAP;
    }
    Decimal::from_f64(volume)
        .map(|v| (v / VOLUME_DIVISOR).min(VOLUME_CAP))
        .unwrap_or(Decimal::ZERO)
}

fn jitter_factor(random: &dyn RandomSource) -> Decimal {
    let draw = Decimal::from_f64(random.next_unit()).unwrap_or(Decimal::ZERO);
    JITTER_MIN + JITTER_SPAN * draw
}
