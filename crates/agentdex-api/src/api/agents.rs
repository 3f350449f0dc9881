// Agent lookup HTTP routes
//
// Read-only. Every identifier route validates the path segment, resolves one
// agent and returns either the full record or a narrow projection.

use agentdex_core::{
    Agent, AgentIdProfileIcon, AgentIdProfileImage, AgentProfileIcon, AgentProfileImage,
    AgentProjection, AgentView, InvalidIdentifier,
};
use agentdex_storage::StorageBackend;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::common::{ApiError, ErrorResponse};
use crate::services::AgentService;

const LIST_FAILED: &str = "Failed to fetch agents";
const AGENT_FAILED: &str = "Failed to fetch agent";
const IMAGE_FAILED: &str = "Failed to fetch agent profile image";
const ICON_FAILED: &str = "Failed to fetch agent profile icon";

/// App state for agents routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AgentService>,
}

impl AppState {
    pub fn new(backend: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(AgentService::new(backend)),
        }
    }
}

/// Create agent routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/agents", get(list_agents))
        .route("/api/agents/:name", get(get_agent_by_name))
        .route("/api/agents/:name/profile-image", get(get_profile_image_by_name))
        .route("/api/agents/:name/profile-icon", get(get_profile_icon_by_name))
        .route("/api/agent/id/:id", get(get_agent_by_id))
        .route("/api/agent/id/:id/profile-image", get(get_profile_image_by_id))
        .route("/api/agent/id/:id/profile-icon", get(get_profile_icon_by_id))
        .with_state(state)
}

/// Path segment as received, or the reason axum could not decode it
type Segment = Result<Path<String>, PathRejection>;

/// An undecodable segment (e.g. invalid UTF-8) is answered like any other bad identifier
fn decode_segment(segment: Segment, invalid: InvalidIdentifier) -> Result<String, ApiError> {
    segment.map(|Path(raw)| raw).map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected agent path segment");
        ApiError::new(StatusCode::BAD_REQUEST, invalid.to_string())
    })
}

async fn by_name(
    state: &AppState,
    segment: Segment,
    view: AgentView,
    failure_message: &str,
) -> Result<Json<AgentProjection>, ApiError> {
    let name = decode_segment(segment, InvalidIdentifier::MissingName)?;
    state
        .service
        .view_by_name(&name, view)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_lookup(e, failure_message))
}

async fn by_id(
    state: &AppState,
    segment: Segment,
    view: AgentView,
    failure_message: &str,
) -> Result<Json<AgentProjection>, ApiError> {
    let id = decode_segment(segment, InvalidIdentifier::MalformedId(String::new()))?;
    state
        .service
        .view_by_id(&id, view)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_lookup(e, failure_message))
}

/// GET /api/agents - List all agents
#[utoipa::path(
    get,
    path = "/api/agents",
    responses(
        (status = 200, description = "All agents in the catalog", body = Vec<Agent>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn list_agents(State(state): State<AppState>) -> Result<Json<Vec<Agent>>, ApiError> {
    let agents = state
        .service
        .list()
        .await
        .map_err(|e| ApiError::from_lookup(e, LIST_FAILED))?;

    Ok(Json(agents))
}

/// GET /api/agents/{name} - Get agent by name
#[utoipa::path(
    get,
    path = "/api/agents/{name}",
    params(
        ("name" = String, Path, description = "Agent name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Agent found", body = Agent),
        (status = 400, description = "Missing agent name", body = ErrorResponse),
        (status = 404, description = "Agent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn get_agent_by_name(
    State(state): State<AppState>,
    name: Segment,
) -> Result<Json<AgentProjection>, ApiError> {
    by_name(&state, name, AgentView::Full, AGENT_FAILED).await
}

/// GET /api/agents/{name}/profile-image - Get agent profile image by name
#[utoipa::path(
    get,
    path = "/api/agents/{name}/profile-image",
    params(
        ("name" = String, Path, description = "Agent name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Agent profile image", body = AgentProfileImage),
        (status = 400, description = "Missing agent name", body = ErrorResponse),
        (status = 404, description = "Agent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn get_profile_image_by_name(
    State(state): State<AppState>,
    name: Segment,
) -> Result<Json<AgentProjection>, ApiError> {
    by_name(&state, name, AgentView::NameAndImage, IMAGE_FAILED).await
}

/// GET /api/agents/{name}/profile-icon - Get agent profile icon by name
#[utoipa::path(
    get,
    path = "/api/agents/{name}/profile-icon",
    params(
        ("name" = String, Path, description = "Agent name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Agent profile icon", body = AgentProfileIcon),
        (status = 400, description = "Missing agent name", body = ErrorResponse),
        (status = 404, description = "Agent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn get_profile_icon_by_name(
    State(state): State<AppState>,
    name: Segment,
) -> Result<Json<AgentProjection>, ApiError> {
    by_name(&state, name, AgentView::NameAndIcon, ICON_FAILED).await
}

/// GET /api/agent/id/{id} - Get agent by ID
#[utoipa::path(
    get,
    path = "/api/agent/id/{id}",
    params(
        ("id" = i64, Path, description = "Agent ID")
    ),
    responses(
        (status = 200, description = "Agent found", body = Agent),
        (status = 400, description = "Missing or malformed agent ID", body = ErrorResponse),
        (status = 404, description = "Agent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn get_agent_by_id(
    State(state): State<AppState>,
    id: Segment,
) -> Result<Json<AgentProjection>, ApiError> {
    by_id(&state, id, AgentView::Full, AGENT_FAILED).await
}

/// GET /api/agent/id/{id}/profile-image - Get agent profile image by ID
#[utoipa::path(
    get,
    path = "/api/agent/id/{id}/profile-image",
    params(
        ("id" = i64, Path, description = "Agent ID")
    ),
    responses(
        (status = 200, description = "Agent profile image", body = AgentIdProfileImage),
        (status = 400, description = "Missing or malformed agent ID", body = ErrorResponse),
        (status = 404, description = "Agent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn get_profile_image_by_id(
    State(state): State<AppState>,
    id: Segment,
) -> Result<Json<AgentProjection>, ApiError> {
    by_id(&state, id, AgentView::IdNameAndImage, IMAGE_FAILED).await
}

/// GET /api/agent/id/{id}/profile-icon - Get agent profile icon by ID
#[utoipa::path(
    get,
    path = "/api/agent/id/{id}/profile-icon",
    params(
        ("id" = i64, Path, description = "Agent ID")
    ),
    responses(
        (status = 200, description = "Agent profile icon", body = AgentIdProfileIcon),
        (status = 400, description = "Missing or malformed agent ID", body = ErrorResponse),
        (status = 404, description = "Agent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn get_profile_icon_by_id(
    State(state): State<AppState>,
    id: Segment,
) -> Result<Json<AgentProjection>, ApiError> {
    by_id(&state, id, AgentView::IdNameAndIcon, ICON_FAILED).await
}
