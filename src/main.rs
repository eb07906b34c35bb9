//! Pulse: a liveness/readiness probe service.
//!
//! This is the application entry point. It initializes tracing, reads the
//! listen address from the environment, sets up the Axum router with the
//! probe endpoints, and starts the HTTP server with graceful shutdown.

mod config;
mod http;
mod middleware;
mod routes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use routes::create_router;

/// Pulse: liveness and readiness probes over HTTP
#[derive(Parser, Debug)]
#[command(name = "pulse", version, about)]
struct Args {
    /// Log level filter (e.g., "pulse=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let filter = tracing_subscriber::EnvFilter::new(&log_filter);
    match LogFormat::from_env() {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(host = %config.host, port = config.port, "Loaded configuration");

    // Create router
    let app = create_router();

    // Start server
    tracing::info!("Starting server at http://{}", config.listen_addr());
    tracing::info!("Available endpoints:");
    tracing::info!("  GET /health - Health check");
    tracing::info!("  GET /ping   - Ping");
    tracing::info!("Test with: curl http://{}/health", config.listen_addr());

    http::start_server(app, &config).await?;

    tracing::info!("Server closed");
    Ok(())
}
