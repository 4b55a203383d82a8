use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::{PredictUseCase, ProcessLauncher};

/// Application state shared across handlers
pub struct AppState<L: ProcessLauncher> {
    pub predictor: Arc<PredictUseCase<L>>,
}

impl<L: ProcessLauncher> AppState<L> {
    pub fn new(predictor: Arc<PredictUseCase<L>>) -> Self {
        AppState { predictor }
    }
}

/// Create the REST API router
pub fn create_router<L: ProcessLauncher + 'static>(state: Arc<AppState<L>>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/predict", post(handlers::predict::<L>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
