// CLI tool for seeding the `agents` table from an agents document.
// Run with: cargo run --bin upload-agents -- --help

use agentdex_api::upload::upload_agents;
use agentdex_storage::{Database, InMemoryDatabase};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
struct Args {
    dry_run: bool,
    file: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut dry_run = false;
        let mut file = None;
        let mut i = 1;

        while i < args.len() {
            match args[i].as_str() {
                "--dry-run" | "-n" => dry_run = true,
                "--file" | "-f" => {
                    i += 1;
                    file = Some(PathBuf::from(
                        args.get(i).context("--file requires a value")?,
                    ));
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                arg => {
                    eprintln!("Unknown argument: {}", arg);
                    print_help();
                    std::process::exit(1);
                }
            }
            i += 1;
        }

        Ok(Self { dry_run, file })
    }
}

fn print_help() {
    eprintln!(
        r#"
upload-agents - Upsert every agent of an agents document into PostgreSQL

USAGE:
    upload-agents [OPTIONS]

OPTIONS:
    -f, --file <PATH>   Agents document to upload (default: bundled dataset)
    -n, --dry-run       Validate the document and list agents without writing
    -h, --help          Show this help message

ENVIRONMENT:
    DATABASE_URL        PostgreSQL connection string (required unless --dry-run)

EXAMPLES:
    # Check what would be uploaded
    upload-agents --dry-run

    # Upload a custom document
    upload-agents --file ./valorant-agents.json
"#
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "upload_agents=info,agentdex_api=info".into()),
        )
        .init();

    let args = Args::parse()?;

    // Load environment
    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!("Loaded .env from {:?}", path);
    }

    let catalog = match &args.file {
        Some(path) => InMemoryDatabase::from_path(path)?,
        None => InMemoryDatabase::bundled()?,
    };
    let agents = catalog.list_agents().await?;
    tracing::info!("Starting upload of {} agents", agents.len());

    if args.dry_run {
        for agent in &agents {
            tracing::info!("[dry-run] Would upload agent: {} (ID: {})", agent.name, agent.agent_id);
        }
        return Ok(());
    }

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;

    let existing = db
        .count_agents()
        .await
        .context("Failed to query the agents table. Check DATABASE_URL and that the table exists")?;
    tracing::info!(existing, "Connected to database, beginning upload");

    let report = upload_agents(&agents, |agent| {
        let db = db.clone();
        async move { db.upsert_agent(&agent).await }
    })
    .await?;

    if !report.is_complete() {
        bail!(
            "{} of {} agents failed to upload: {:?}",
            report.failed.len(),
            agents.len(),
            report.failed
        );
    }

    Ok(())
}
