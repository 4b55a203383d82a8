use crate::domain::{FeatureImportance, IndividualPredictions, ModelPerformance, PredictionOutcome};
use market_signal::{SentimentScore, SnapshotInput};
use serde::{Deserialize, Serialize};

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

/// Body of `POST /api/predict`
///
/// Every field is optional on the wire so that missing values surface as
/// validation errors naming the field rather than as parse errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub open_price: Option<f64>,
    #[serde(default)]
    pub close_price: Option<f64>,
    #[serde(default)]
    pub high_price: Option<f64>,
    #[serde(default)]
    pub low_price: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub news_headline: Option<String>,
}

impl PredictRequest {
    pub fn snapshot(&self) -> SnapshotInput {
        SnapshotInput {
            open: self.open_price,
            high: self.high_price,
            low: self.low_price,
            close: self.close_price,
            volume: self.volume,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub confidence: f64,
    pub model_performance: ModelPerformance,
    pub feature_importance: Vec<FeatureImportance>,
    pub individual_predictions: IndividualPredictions,
    pub calculated_sentiment: SentimentScore,
    pub using_fallback: bool,
    pub status: &'static str,
}

impl From<PredictionOutcome> for PredictionResponse {
    fn from(outcome: PredictionOutcome) -> Self {
        let reply = outcome.prediction;
        PredictionResponse {
            prediction: reply.prediction,
            confidence: reply.confidence,
            model_performance: reply.model_performance,
            feature_importance: reply.feature_importance,
            individual_predictions: reply.individual_predictions,
            calculated_sentiment: outcome.calculated_sentiment,
            using_fallback: reply.using_fallback,
            status: STATUS_SUCCESS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub status: &'static str,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: Option<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            details,
            status: STATUS_ERROR,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse { status: "ok" }
    }
}
