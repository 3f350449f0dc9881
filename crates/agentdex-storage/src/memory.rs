// In-memory catalog
// Decision: Loaded once at startup and never mutated, so no locking
//
// Serves agents from a JSON document of shape `{"agents": [...]}`, either the
// dataset bundled into the binary or a file supplied at startup.

use agentdex_core::{names_match, Agent, AgentsDocument};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Dataset compiled into the binary, used when no file is configured.
pub const BUNDLED_AGENTS: &str = include_str!("../data/agents.json");

/// Immutable in-memory agent catalog
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    agents: Vec<Agent>,
}

impl InMemoryDatabase {
    /// Build a catalog, rejecting duplicate ids or names.
    pub fn new(agents: Vec<Agent>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(agents.len());
        let mut names = HashSet::with_capacity(agents.len());
        for agent in &agents {
            if !ids.insert(agent.agent_id) {
                bail!("Duplicate agent_id {} in catalog", agent.agent_id);
            }
            if !names.insert(agent.name.to_lowercase()) {
                bail!("Duplicate agent name {:?} in catalog", agent.name);
            }
        }
        tracing::info!(agents = agents.len(), "Agent catalog loaded");
        Ok(Self { agents })
    }

    /// Parse a `{"agents": [...]}` document
    pub fn from_json(json: &str) -> Result<Self> {
        let document: AgentsDocument =
            serde_json::from_str(json).context("Failed to parse agents document")?;
        Self::new(document.agents)
    }

    /// Load a `{"agents": [...]}` document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read agents file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid agents file {}", path.display()))
    }

    /// The dataset bundled with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_AGENTS).context("Bundled agents dataset is invalid")
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub async fn list_agents(&self) -> Result<Vec<Agent>> {
        Ok(self.agents.clone())
    }

    pub async fn get_agent_by_id(&self, agent_id: i64) -> Result<Option<Agent>> {
        Ok(self
            .agents
            .iter()
            .find(|a| a.agent_id == agent_id)
            .cloned())
    }

    pub async fn get_agent_by_name(&self, name: &str) -> Result<Option<Agent>> {
        Ok(self
            .agents
            .iter()
            .find(|a| names_match(&a.name, name))
            .cloned())
    }
}
