// OpenAPI specification generation
//
// Used by the API server (for Swagger UI) and the export-openapi binary.

use crate::api;
use crate::api::ErrorResponse;
use agentdex_core::{
    Ability, Agent, AgentIdProfileIcon, AgentIdProfileImage, AgentProfileIcon, AgentProfileImage,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Agentdex API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::agents::list_agents,
        api::agents::get_agent_by_name,
        api::agents::get_profile_image_by_name,
        api::agents::get_profile_icon_by_name,
        api::agents::get_agent_by_id,
        api::agents::get_profile_image_by_id,
        api::agents::get_profile_icon_by_id,
    ),
    components(
        schemas(
            Agent, Ability,
            AgentProfileImage, AgentProfileIcon,
            AgentIdProfileImage, AgentIdProfileIcon,
            ErrorResponse,
        )
    ),
    tags(
        (name = "agents", description = "Read-only agent catalog endpoints")
    ),
    info(
        title = "Agentdex API",
        version = "0.1.0",
        description = "Read-only API over the agent catalog: full records, profile images and icons",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
