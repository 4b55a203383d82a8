//! Data exchanged with the model runtime
//!
//! [`EnrichedPayload`] is what the runtime reads on stdin, [`RuntimePrediction`]
//! is what it must print on stdout.

use market_signal::{MarketSnapshot, SentimentScore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Market data plus the computed sentiment, as sent to the runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPayload {
    pub open_price: f64,
    pub close_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub volume: f64,
    pub sentiment_score: SentimentScore,
    pub news_headline: String,
}

impl EnrichedPayload {
    pub fn new(snapshot: &MarketSnapshot, sentiment: SentimentScore, headline: String) -> Self {
        EnrichedPayload {
            open_price: snapshot.open(),
            close_price: snapshot.close(),
            high_price: snapshot.high(),
            low_price: snapshot.low(),
            volume: snapshot.volume(),
            sentiment_score: sentiment,
            news_headline: headline,
        }
    }

    /// Serialized form written to the runtime's stdin
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Outputs of the ensemble members feeding the meta prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualPredictions {
    pub random_forest: f64,
    pub ridge: f64,
    pub xgboost: f64,
    pub meta_model: f64,
}

#[derive(Error, Debug)]
pub enum ReplyError {
    #[error("malformed runtime output: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("runtime output violates contract: {0}")]
    Contract(String),
}

/// Parsed reply of the model runtime
///
/// Unknown fields (e.g. the runtime's own `status`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimePrediction {
    pub prediction: f64,
    pub confidence: f64,
    pub model_performance: ModelPerformance,
    pub feature_importance: Vec<FeatureImportance>,
    pub individual_predictions: IndividualPredictions,
    /// The runtime fell back to its backup computation
    #[serde(default)]
    pub using_fallback: bool,
}

impl RuntimePrediction {
    pub fn parse(raw: &[u8]) -> Result<Self, ReplyError> {
        let reply: RuntimePrediction = serde_json::from_slice(raw)?;
        reply.check_contract()?;
        Ok(reply)
    }

    fn check_contract(&self) -> Result<(), ReplyError> {
        if !self.prediction.is_finite() {
            return Err(ReplyError::Contract(format!(
                "prediction is not finite: {}",
                self.prediction
            )));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ReplyError::Contract(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        Ok(())
    }
}

/// Result of one orchestrated prediction
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub request_id: Uuid,
    pub prediction: RuntimePrediction,
    /// Always the orchestrator's own score, whatever the runtime did with it
    pub calculated_sentiment: SentimentScore,
    /// Candidate that produced the reply
    pub candidate: String,
}
