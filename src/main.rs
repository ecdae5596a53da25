use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use clinic_core::{
    DirectoryService, config::core_config_from_env_values, constants::DEFAULT_REST_ADDR,
};

/// Main entry point for the clinic directory application
///
/// Serves the directory page, the JSON API and the Swagger UI from one REST server.
///
/// # Environment Variables
/// - `CLINIC_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CLINIC_CATALOG_FILE`: YAML clinic catalog (default: the built-in catalog)
/// - `CLINIC_EMERGENCY_NUMBER`: Number dialled by the emergency action (default: "108")
/// - `CLINIC_BOOKING_SCOPE`: `per-clinic` (default) or `shared` booking selections
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, catalog loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_run=info".parse()?)
                .add_directive("clinic_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CLINIC_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    // Resolve configuration once at startup and fail fast on bad values.
    let cfg = Arc::new(core_config_from_env_values(
        std::env::var("CLINIC_CATALOG_FILE").ok(),
        std::env::var("CLINIC_EMERGENCY_NUMBER").ok(),
        std::env::var("CLINIC_BOOKING_SCOPE").ok(),
    )?);
    let directory = DirectoryService::from_config(cfg)?;

    tracing::info!("++ Starting clinic directory REST on {}", rest_addr);

    let rest_app = router(AppState::new(directory));
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, rest_app).await?;

    Ok(())
}
