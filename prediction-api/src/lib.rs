//! Prediction API
//!
//! HTTP front end of the price predictor: scores the news headline of each
//! request and delegates the numeric prediction to an out-of-process model
//! runtime, falling back through a list of interpreter candidates.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Payloads, runtime replies, invocation records and errors
//! - **Application**: Use cases and port interfaces (PredictUseCase, RuntimeInvoker, ProcessLauncher)
//! - **Infrastructure**: Implementations of ports (TokioProcessLauncher, TracingObserver) and config
//! - **Presentation**: REST API handlers
//!
//! The sentiment heuristic itself lives in the `market-signal` crate.
//!
//! # Example
//!
//! ```ignore
//! use prediction_api::{PredictionServer, RuntimeConfig, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let runtime = RuntimeConfig::load_default()?;
//!     let server = PredictionServer::new(ServerConfig::from_env(), runtime)?;
//!     server.run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    EnrichedPayload, LaunchSpec, PredictError, PredictionEvent, PredictionOutcome,
    RuntimePrediction,
};

pub use infrastructure::{ConfigError, RuntimeConfig, TokioProcessLauncher, TracingObserver};

pub use application::{
    LaunchError, NoopObserver, PredictCommand, PredictUseCase, PredictionObserver,
    ProcessLauncher, RuntimeInvoker,
};

pub use presentation::{AppState, create_router};

use axum::Router;
use market_signal::{RandomSource, ThreadRandom};
use std::sync::Arc;
use tokio::net::TcpListener;

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the `HOST` and `PORT` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        ServerConfig { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The prediction server
pub struct PredictionServer<L: ProcessLauncher + 'static> {
    pub config: ServerConfig,
    pub predictor: Arc<PredictUseCase<L>>,
}

impl<L: ProcessLauncher + 'static> PredictionServer<L> {
    /// Create a server around an arbitrary launcher
    pub fn with_launcher(
        config: ServerConfig,
        runtime: &RuntimeConfig,
        launcher: Arc<L>,
        random: Arc<dyn RandomSource>,
        observer: Arc<dyn PredictionObserver>,
    ) -> Result<Self, ConfigError> {
        runtime.validate()?;

        let invoker = RuntimeInvoker::new(
            launcher,
            runtime.launch_specs(),
            runtime.timeout(),
            Arc::clone(&observer),
        );
        let predictor = Arc::new(PredictUseCase::new(invoker, random, observer));

        Ok(PredictionServer { config, predictor })
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(Arc::clone(&self.predictor)));
        create_router(state)
    }

    /// Run the prediction server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.addr();
        let router = self.rest_router();

        tracing::info!("Prediction API listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

impl PredictionServer<TokioProcessLauncher> {
    /// Create a server launching real child processes
    pub fn new(config: ServerConfig, runtime: RuntimeConfig) -> Result<Self, ConfigError> {
        let launcher = Arc::new(TokioProcessLauncher::with_working_dir(
            runtime.working_dir.clone(),
        ));
        Self::with_launcher(
            config,
            &runtime,
            launcher,
            Arc::new(ThreadRandom),
            Arc::new(TracingObserver::new()),
        )
    }
}
