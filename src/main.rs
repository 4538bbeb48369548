//! Server binary for the Leave Entitlement Engine.

use anyhow::Context;
use tracing::info;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_dir = std::env::var("LEAVE_ENGINE_CONFIG")
        .unwrap_or_else(|_| "./config/annual_leave".to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("Failed to load policy configuration from {config_dir}"))?;
    info!(policy = %config.policy().name, version = %config.policy().version, "Policy loaded");

    let addr =
        std::env::var("LEAVE_ENGINE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Leave entitlement engine listening");

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
