// Batch upload of a catalog into the `agents` table
//
// One smoke-test upsert first; if it fails nothing else is attempted. After
// that every agent is upserted in order. Individual failures are logged and
// skipped. No retries, and no rollback of rows already written.

use agentdex_core::Agent;
use anyhow::{Context, Result};
use std::future::Future;

/// Outcome of a full upload
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: usize,
    /// (agent_id, name) of every agent that failed
    pub failed: Vec<(i64, String)>,
}

impl UploadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Upsert `agents` one at a time through `upsert`.
///
/// Returns an error only when the smoke test fails.
pub async fn upload_agents<F, Fut>(agents: &[Agent], mut upsert: F) -> Result<UploadReport>
where
    F: FnMut(Agent) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let Some(first) = agents.first() else {
        tracing::warn!("No agents to upload");
        return Ok(UploadReport::default());
    };

    tracing::info!(name = %first.name, agent_id = first.agent_id, "Testing with first agent");
    upsert(first.clone())
        .await
        .with_context(|| format!("Test upload for {} failed, aborting full upload", first.name))?;
    tracing::info!("Test upload for {} successful, proceeding with full upload", first.name);

    let mut report = UploadReport::default();
    for agent in agents {
        tracing::info!(agent_id = agent.agent_id, "Uploading agent: {}", agent.name);
        match upsert(agent.clone()).await {
            Ok(()) => {
                tracing::info!("Successfully uploaded agent: {}", agent.name);
                report.uploaded += 1;
            }
            Err(e) => {
                tracing::error!("Error uploading agent {}: {:#}", agent.name, e);
                report.failed.push((agent.agent_id, agent.name.clone()));
            }
        }
    }

    tracing::info!(
        uploaded = report.uploaded,
        failed = report.failed.len(),
        "Upload complete"
    );
    Ok(report)
}
