// Server configuration loaded from environment variables.
// Decision: Default to the bundled static dataset so the server runs with no setup

use agentdex_storage::StorageBackend;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9000";

/// Where agent records are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    /// In-memory catalog from the bundled dataset or `AGENTS_FILE`
    #[default]
    Static,
    /// PostgreSQL `agents` table at `DATABASE_URL`
    Postgres,
}

impl DataSourceKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "static" | "file" | "memory" => Some(DataSourceKind::Static),
            "postgres" | "postgresql" | "database" => Some(DataSourceKind::Postgres),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_source: DataSourceKind,
    /// Agents document for the static backend; bundled dataset when unset
    pub agents_file: Option<PathBuf>,
    pub database_url: Option<String>,
    pub bind_addr: String,
    /// Prefix nested in front of the agent routes, e.g. "/v1"
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_source: DataSourceKind::Static,
            agents_file: None,
            database_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_prefix: String::new(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let data_source = match get("AGENTS_DATA_SOURCE") {
            Some(raw) => DataSourceKind::parse(&raw)
                .with_context(|| format!("Unknown AGENTS_DATA_SOURCE {:?}", raw))?,
            None => DataSourceKind::default(),
        };

        let database_url = get("DATABASE_URL");
        if data_source == DataSourceKind::Postgres && database_url.is_none() {
            bail!("DATABASE_URL environment variable required for the postgres data source");
        }

        let cors_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            data_source,
            agents_file: get("AGENTS_FILE").map(PathBuf::from),
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            api_prefix: get("API_PREFIX").unwrap_or_default(),
            cors_origins,
        })
    }

    /// Acquire the configured data source. Called once at startup.
    pub async fn build_backend(&self) -> Result<StorageBackend> {
        match self.data_source {
            DataSourceKind::Static => match &self.agents_file {
                Some(path) => StorageBackend::from_path(path),
                None => StorageBackend::bundled(),
            },
            DataSourceKind::Postgres => {
                let url = self
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL environment variable required")?;
                StorageBackend::postgres(url)
                    .await
                    .context("Failed to connect to database")
            }
        }
    }
}
