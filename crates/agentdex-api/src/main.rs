// Agentdex API server
// Decision: Data source is acquired once at startup and shared read-only for the process lifetime

use agentdex_api::api;
use agentdex_api::config::ServerConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentdex_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded .env from {:?}", path);
    }

    tracing::info!("agentdex-api starting...");

    let config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        data_source = ?config.data_source,
        agents_file = ?config.agents_file,
        "Data source configured"
    );

    let backend = config
        .build_backend()
        .await
        .context("Failed to initialize data source")?;
    tracing::info!(kind = backend.kind(), "Data source ready");

    let app = api::router(Arc::new(backend), &config);

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
