// Database models (internal, may differ from public types)

use agentdex_core::{Ability, Agent, AgentStory};
use sqlx::types::Json;
use sqlx::FromRow;

/// One row of the `agents` table. Structured columns are JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct AgentRow {
    pub agent_id: i64,
    pub name: String,
    pub role: String,
    pub role_icon: String,
    pub origin: String,
    pub release_patch: String,
    pub profile_icon: String,
    pub profile_image: String,
    pub abilities: Json<Vec<Ability>>,
    pub gallery: Json<Vec<String>>,
    pub story: Json<AgentStory>,
}

impl From<AgentRow> for Agent {
    fn from(row: AgentRow) -> Self {
        Agent {
            agent_id: row.agent_id,
            name: row.name,
            role: row.role,
            role_icon: row.role_icon,
            abilities: row.abilities.0,
            origin: row.origin,
            release_patch: row.release_patch,
            profile_icon: row.profile_icon,
            profile_image: row.profile_image,
            gallery: row.gallery.0,
            story: row.story.0,
        }
    }
}
