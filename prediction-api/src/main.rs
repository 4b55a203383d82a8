use prediction_api::{PredictionServer, RuntimeConfig, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Prediction API - price prediction with headline sentiment

USAGE:
    prediction-api [OPTIONS]

OPTIONS:
    --config <PATH>     Load model runtime configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    MODEL_SCRIPT        Model script passed to every runtime candidate
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with the default candidates (python, python3, py)
    prediction-api

    # Run with config file
    prediction-api --config runtime.json

    # Run with custom port and script
    PORT=9000 MODEL_SCRIPT=/srv/model/predict.py prediction-api
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prediction_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let runtime = match config_path {
        Some(path) => {
            tracing::info!("Loading runtime configuration from: {}", path);
            RuntimeConfig::from_file(&path)?
        }
        None => {
            tracing::info!("Using default runtime configuration");
            RuntimeConfig::load_default()?
        }
    }
    .with_env_overrides();

    let server = PredictionServer::new(ServerConfig::from_env(), runtime.clone())?;

    tracing::info!("Starting Prediction API");
    for (index, spec) in runtime.launch_specs().iter().enumerate() {
        tracing::info!("Runtime candidate {}: {}", index + 1, spec);
    }
    tracing::info!("Runtime timeout: {}ms", runtime.timeout_ms);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /api/health");
    tracing::info!("  POST /api/predict");

    server.run().await
}
