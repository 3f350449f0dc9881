// Repository layer for the PostgreSQL `agents` table

use agentdex_core::Agent;
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

use crate::models::AgentRow;

/// How long a request waits for a pooled connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// More than one row matched an identifier that must be unique.
#[derive(Debug, Error)]
#[error("Multiple agents match {0}")]
pub struct AmbiguousMatch(pub String);

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await?;
        tracing::info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create a pool that only connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(database_url)?;
        tracing::debug!("PostgreSQL pool created, connecting on first use");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Row count, doubles as a connectivity check for the `agents` table
    pub async fn count_agents(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agents")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count agents")?;

        Ok(count)
    }

    pub async fn list_agents(&self) -> Result<Vec<Agent>> {
        let rows = sqlx::query_as::<_, AgentRow>(
            r#"
            SELECT agent_id, name, role, role_icon, origin, release_patch,
                   profile_icon, profile_image, abilities, gallery, story
            FROM agents
            ORDER BY agent_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list agents")?;

        Ok(rows.into_iter().map(Agent::from).collect())
    }

    pub async fn get_agent_by_id(&self, agent_id: i64) -> Result<Option<Agent>> {
        let rows = sqlx::query_as::<_, AgentRow>(
            r#"
            SELECT agent_id, name, role, role_icon, origin, release_patch,
                   profile_icon, profile_image, abilities, gallery, story
            FROM agents
            WHERE agent_id = $1
            LIMIT 2
            "#,
        )
        .bind(agent_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to get agent by id")?;

        single(rows, || format!("agent_id {}", agent_id))
    }

    /// Case-insensitive exact match on `name`
    pub async fn get_agent_by_name(&self, name: &str) -> Result<Option<Agent>> {
        let rows = sqlx::query_as::<_, AgentRow>(
            r#"
            SELECT agent_id, name, role, role_icon, origin, release_patch,
                   profile_icon, profile_image, abilities, gallery, story
            FROM agents
            WHERE LOWER(name) = LOWER($1)
            LIMIT 2
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .context("Failed to get agent by name")?;

        single(rows, || format!("name {:?}", name))
    }

    /// Insert or replace an agent keyed by `agent_id`
    pub async fn upsert_agent(&self, agent: &Agent) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO agents (agent_id, name, role, role_icon, origin, release_patch,
                                profile_icon, profile_image, abilities, gallery, story)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (agent_id) DO UPDATE SET
                name = EXCLUDED.name,
                role = EXCLUDED.role,
                role_icon = EXCLUDED.role_icon,
                origin = EXCLUDED.origin,
                release_patch = EXCLUDED.release_patch,
                profile_icon = EXCLUDED.profile_icon,
                profile_image = EXCLUDED.profile_image,
                abilities = EXCLUDED.abilities,
                gallery = EXCLUDED.gallery,
                story = EXCLUDED.story
            "#,
        )
        .bind(agent.agent_id)
        .bind(&agent.name)
        .bind(&agent.role)
        .bind(&agent.role_icon)
        .bind(&agent.origin)
        .bind(&agent.release_patch)
        .bind(&agent.profile_icon)
        .bind(&agent.profile_image)
        .bind(Json(&agent.abilities))
        .bind(Json(&agent.gallery))
        .bind(Json(&agent.story))
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to upsert agent {}", agent.agent_id))?;

        Ok(())
    }
}

/// At most one row may match a single identifier
fn single(mut rows: Vec<AgentRow>, what: impl FnOnce() -> String) -> Result<Option<Agent>> {
    if rows.len() > 1 {
        return Err(AmbiguousMatch(what()).into());
    }
    Ok(rows.pop().map(Agent::from))
}
