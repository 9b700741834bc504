//! mintscan - token-risk aggregation API for Solana mints
//!
//! This is the main entry point for the service.
//! It sets up the Axum web server with middleware and routes.

use axum::{routing::get, Router};
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mintscan::config::AppConfig;
use mintscan::error::AppResult;
use mintscan::handlers::{health_check, scan_handler, AppState};
use mintscan::scanner::Scanner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    tracing::info!("Starting mintscan v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        metadata_configured = config.upstream.helius_api_key.is_some(),
        holder_provider_configured = config.upstream.birdeye_api_key.is_some(),
        "Configuration loaded"
    );

    if config.upstream.helius_api_key.is_none() {
        tracing::warn!(
            "No metadata API key configured - every scan will resolve to token-not-found"
        );
    }

    // Build the aggregation pipeline
    let scanner = Scanner::new(&config)?;
    tracing::info!("Scanner initialized");

    // Create shared state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        scanner,
        started_at: Utc::now(),
    });

    // Build router: the scan endpoint plus a health check, CORS open to
    // any origin
    let app = Router::new()
        .route("/scan", get(scan_handler))
        .route("/health", get(health_check))
        .with_state(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mintscan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// Load and validate configuration
fn load_config() -> AppResult<AppConfig> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    config.validate()?;

    Ok(config)
}
