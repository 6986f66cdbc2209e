//! Store Checkout Host
//!
//! Axum server that serves the WASM checkout frontend and relays
//! `POST /api/checkout` to the payment service, so the page can use a
//! same-origin endpoint. No payment processing happens here.

mod config;
mod handlers;
mod state;

use std::path::Path;

use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HostConfig;
use crate::handlers::{health_check, relay_checkout};
use crate::state::AppState;

const DEFAULT_LOG_DIRECTIVE: &str = "info,tower_http=debug";

/// Load `.env` (or the given file), then read the log directive, so
/// `RUST_LOG` may come from either the process environment or the file.
fn load_environment(env_file: Option<&Path>) -> String {
    if let Some(path) = env_file {
        dotenvy::from_path(path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.into())
}

fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/checkout", post(relay_checkout))
        // Static files (WASM frontend)
        .fallback_service(tower_http::services::ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_directive = load_environment(None);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_directive))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HostConfig::from_env();

    match &config.upstream_url {
        Some(url) => tracing::info!("✓ Relaying checkout requests to {}", url),
        None => {
            tracing::warn!("⚠ Payment service not configured - checkout will answer 503");
            tracing::warn!("  Set PAYMENT_UPSTREAM_URL in .env");
        }
    }

    let app = build_router(AppState::new(config.upstream_url.clone()), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("🚀 checkout host running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/checkout - Relay to payment service");
    tracing::info!("  GET  /*            - Frontend from {}", config.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}
