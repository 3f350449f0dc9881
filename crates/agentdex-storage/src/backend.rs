// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// Serves agents either from PostgreSQL or from an in-memory catalog. The
// backend is chosen once at startup and shared read-only by every request.

use agentdex_core::Agent;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::memory::InMemoryDatabase;
use crate::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL `agents` table
    Postgres(Database),
    /// Static catalog loaded at startup
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Static backend over the bundled dataset
    pub fn bundled() -> Result<Self> {
        Ok(Self::in_memory(InMemoryDatabase::bundled()?))
    }

    /// Static backend over a JSON document on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::in_memory(InMemoryDatabase::from_path(path)?))
    }

    pub fn in_memory(db: InMemoryDatabase) -> Self {
        Self::InMemory(Arc::new(db))
    }

    /// Short name for logs and the health endpoint
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "static",
        }
    }

    pub async fn list_agents(&self) -> Result<Vec<Agent>> {
        match self {
            Self::Postgres(db) => db.list_agents().await,
            Self::InMemory(db) => db.list_agents().await,
        }
    }

    pub async fn get_agent_by_id(&self, agent_id: i64) -> Result<Option<Agent>> {
        match self {
            Self::Postgres(db) => db.get_agent_by_id(agent_id).await,
            Self::InMemory(db) => db.get_agent_by_id(agent_id).await,
        }
    }

    pub async fn get_agent_by_name(&self, name: &str) -> Result<Option<Agent>> {
        match self {
            Self::Postgres(db) => db.get_agent_by_name(name).await,
            Self::InMemory(db) => db.get_agent_by_name(name).await,
        }
    }
}
