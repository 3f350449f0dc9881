// Checks that DATABASE_URL is reachable and the `agents` table is queryable.
// Run with: cargo run --bin check-connection

use agentdex_storage::Database;
use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "check_connection=info".into()),
        )
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded .env from {:?}", path);
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    tracing::info!("Checking database connection...");

    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database. Please check your credentials")?;
    tracing::info!("Successfully connected to database");

    let count = db
        .count_agents()
        .await
        .context("The agents table might not exist or have the wrong structure")?;

    // Decoding a row verifies the column types, not just that the table exists
    match db.list_agents().await {
        Ok(agents) => {
            tracing::info!(rows = count, decoded = agents.len(), "Agents table structure looks correct");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Agents table rows could not be decoded: {:#}", e);
            Err(e)
        }
    }
}
