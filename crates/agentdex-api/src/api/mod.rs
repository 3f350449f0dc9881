// HTTP API routes
//
// Each submodule handles one resource with its own AppState. `router` wires
// them together with health, Swagger UI and the HTTP middleware.

pub mod agents;
pub mod common;
pub mod health;

pub use common::{ApiError, ErrorResponse};

use agentdex_storage::StorageBackend;
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::openapi::ApiDoc;

/// Build the complete application router over an acquired backend
pub fn router(backend: Arc<StorageBackend>, config: &ServerConfig) -> Router {
    let agents_state = agents::AppState::new(backend.clone());
    let health_state = health::HealthState {
        data_source: backend.kind(),
    };

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    let agent_routes = agents::routes(agents_state);
    let agent_routes = if config.api_prefix.is_empty() {
        agent_routes
    } else {
        Router::new().nest(&config.api_prefix, agent_routes)
    };

    // Health and docs are never prefixed
    let app = Router::new()
        .route("/health", get(health::health).with_state(health_state))
        .merge(agent_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    let cors_origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let app = if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
        app
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
    };

    app.layer(TraceLayer::new_for_http())
}
