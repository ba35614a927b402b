//! HTTP service entry point for the Term Results Engine.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use results_engine::api::{create_router, AppState};
use results_engine::config::ConfigLoader;
use results_engine::store::InMemoryStudentStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("RESULTS_CONFIG_DIR").unwrap_or_else(|_| "./config/school".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        bands = config.grading().scales.len(),
        "Configuration loaded"
    );

    let store = Arc::new(InMemoryStudentStore::new());
    let state = AppState::new(config, store);
    let router = create_router(state);

    let bind = std::env::var("RESULTS_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(address = %bind, "Term results engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
