use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use crate::application::{PredictCommand, ProcessLauncher};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// POST /api/predict
pub async fn predict<L: ProcessLauncher + 'static>(
    State(state): State<Arc<AppState<L>>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(request) = payload.inspect_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected predict request body");
    })?;

    let command = PredictCommand {
        snapshot: request.snapshot(),
        headline: request.news_headline,
    };

    match state.predictor.execute(command).await {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(e) => {
            if e.is_client_error() {
                tracing::debug!(error = %e, "Invalid prediction request");
            } else {
                tracing::error!(error = %e, "Prediction failed");
            }
            Err(e.into())
        }
    }
}
