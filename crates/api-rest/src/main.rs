//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API and directory page on their own.
//!
//! ## Intended use
//! Useful during development. The workspace's main `clinic-run` binary serves the same router
//! and is what deployments run.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use clinic_core::{config::core_config_from_env_values, constants::DEFAULT_REST_ADDR, DirectoryService};

/// Main entry point for the clinic REST API server
///
/// # Environment Variables
/// - `CLINIC_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `CLINIC_CATALOG_FILE`: YAML catalog to serve instead of the built-in one
/// - `CLINIC_EMERGENCY_NUMBER`: Number dialled by the emergency action (default: "108")
/// - `CLINIC_BOOKING_SCOPE`: `per-clinic` (default) or `shared`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration or catalog is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("CLINIC_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = Arc::new(core_config_from_env_values(
        std::env::var("CLINIC_CATALOG_FILE").ok(),
        std::env::var("CLINIC_EMERGENCY_NUMBER").ok(),
        std::env::var("CLINIC_BOOKING_SCOPE").ok(),
    )?);
    let directory = DirectoryService::from_config(cfg)?;

    tracing::info!("-- Starting clinic REST API on {}", addr);

    let app = router(AppState::new(directory));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
