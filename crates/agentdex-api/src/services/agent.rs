// Agent lookup service
//
// Resolves a raw path identifier (name or numeric id) to a single agent and
// extracts the requested view. Pure reads over the injected backend.

use agentdex_core::{project, Agent, AgentIdentifier, AgentProjection, AgentView, LookupError, Result};
use agentdex_storage::{AmbiguousMatch, StorageBackend};
use std::sync::Arc;
use tracing::Instrument;

pub struct AgentService {
    backend: Arc<StorageBackend>,
}

impl AgentService {
    pub fn new(backend: Arc<StorageBackend>) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Agent>> {
        self.backend.list_agents().await.map_err(storage_error)
    }

    /// Look up an agent by an already validated identifier
    pub async fn resolve(&self, identifier: &AgentIdentifier) -> Result<Agent> {
        let span = tracing::debug_span!(
            "agent.resolve",
            identifier = %identifier,
            backend = self.backend.kind(),
        );

        async {
            let found = match identifier {
                AgentIdentifier::Name(name) => self.backend.get_agent_by_name(name).await,
                AgentIdentifier::Id(id) => self.backend.get_agent_by_id(*id).await,
            }
            .map_err(storage_error)?;

            found.ok_or_else(|| {
                tracing::debug!("Agent not found");
                LookupError::NotFound
            })
        }
        .instrument(span)
        .await
    }

    /// Resolve by name, case-insensitively
    pub async fn resolve_by_name(&self, raw: &str) -> Result<Agent> {
        let identifier = AgentIdentifier::name(raw)?;
        self.resolve(&identifier).await
    }

    /// Resolve by numeric id given as a string
    pub async fn resolve_by_id(&self, raw: &str) -> Result<Agent> {
        let identifier = AgentIdentifier::id(raw)?;
        self.resolve(&identifier).await
    }

    pub async fn view_by_name(&self, raw: &str, view: AgentView) -> Result<AgentProjection> {
        let agent = self.resolve_by_name(raw).await?;
        Ok(project(agent, view))
    }

    pub async fn view_by_id(&self, raw: &str, view: AgentView) -> Result<AgentProjection> {
        let agent = self.resolve_by_id(raw).await?;
        Ok(project(agent, view))
    }
}

/// Classify a storage failure. Ambiguous matches mean the catalog itself is broken.
fn storage_error(err: anyhow::Error) -> LookupError {
    match err.downcast_ref::<AmbiguousMatch>() {
        Some(ambiguous) => LookupError::unexpected(ambiguous.to_string()),
        None => LookupError::data_source(err),
    }
}
