//! Q&A API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p qna-api
//! ```
//!
//! Configuration is loaded from environment variables (with an optional .env file).

use qna_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first; it decides the tracing format
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Starting Q&A API server"
    );

    if let Err(e) = qna_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
