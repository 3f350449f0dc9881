// Router-level tests for the agent lookup API
// Run with: cargo test -p agentdex-api --test api_test
// Serves the bundled dataset in-process, no database or running server needed.

use agentdex_api::api::router;
use agentdex_api::config::ServerConfig;
use agentdex_storage::{Database, InMemoryDatabase, StorageBackend};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn bundled_app() -> Router {
    let backend = Arc::new(StorageBackend::bundled().unwrap());
    router(backend, &ServerConfig::default())
}

fn unreachable_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgres://agentdex@127.0.0.1:1/agentdex")
        .unwrap();
    let backend = Arc::new(StorageBackend::Postgres(Database::new(pool)));
    router(backend, &ServerConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn bundled_agent(agent_id: i64) -> Value {
    let db = InMemoryDatabase::bundled().unwrap();
    let agent = db.get_agent_by_id(agent_id).await.unwrap().unwrap();
    serde_json::to_value(agent).unwrap()
}

#[tokio::test]
async fn test_get_agent_by_id_returns_full_record() {
    let (status, body) = get(bundled_app(), "/api/agent/id/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, bundled_agent(1).await);
    assert_eq!(body["name"], "Brimstone");
    assert!(body["story"]["orbitalArsenal"].is_object());
}

#[tokio::test]
async fn test_get_agent_by_name_ignores_case() {
    let expected = bundled_agent(1).await;

    for uri in [
        "/api/agents/Brimstone",
        "/api/agents/brimstone",
        "/api/agents/BRIMSTONE",
    ] {
        let (status, body) = get(bundled_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, expected, "{}", uri);
    }
}

#[tokio::test]
async fn test_name_with_encoded_slash() {
    let (status, body) = get(bundled_app(), "/api/agents/kay%2Fo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agent_id"], 17);
}

#[tokio::test]
async fn test_unknown_name_is_not_found() {
    let (status, body) = get(bundled_app(), "/api/agents/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Agent not found"}));
}

#[tokio::test]
async fn test_partial_name_is_not_found() {
    let (status, _) = get(bundled_app(), "/api/agents/Brim").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (status, body) = get(bundled_app(), "/api/agent/id/999999/profile-icon").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Agent not found"}));
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    for uri in [
        "/api/agent/id/notanumber",
        "/api/agent/id/12abc/profile-image",
        "/api/agent/id/1.5/profile-icon",
    ] {
        let (status, body) = get(bundled_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, json!({"error": "Invalid agent ID format"}), "{}", uri);
    }
}

#[tokio::test]
async fn test_blank_identifiers_are_bad_request() {
    let (status, body) = get(bundled_app(), "/api/agents/%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Agent name is required"}));

    let (status, body) = get(bundled_app(), "/api/agent/id/%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Agent ID is required"}));
}

#[tokio::test]
async fn test_undecodable_segment_is_json_bad_request() {
    for (uri, message) in [
        ("/api/agents/%FF", "Agent name is required"),
        ("/api/agents/%FF/profile-icon", "Agent name is required"),
        ("/api/agent/id/%FF", "Invalid agent ID format"),
        ("/api/agent/id/%FF/profile-image", "Invalid agent ID format"),
    ] {
        let response = bundled_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json",
            "{}",
            uri
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": message}), "{}", uri);
    }
}

#[tokio::test]
async fn test_profile_projections_by_name() {
    let (status, body) = get(bundled_app(), "/api/agents/Brimstone/profile-icon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "name": "Brimstone",
            "profile_icon": "/images/agents/brimstone/profile-icon.png"
        })
    );

    let (status, body) = get(bundled_app(), "/api/agents/sage/profile-image").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "name": "Sage",
            "profile_image": "/images/agents/sage/profile-image.png"
        })
    );
}

#[tokio::test]
async fn test_profile_projections_by_id() {
    let (status, body) = get(bundled_app(), "/api/agent/id/2/profile-image").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "agent_id": 2,
            "name": "Phoenix",
            "profile_image": "/images/agents/phoenix/profile-image.png"
        })
    );

    let (status, body) = get(bundled_app(), "/api/agent/id/17/profile-icon").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "agent_id": 17,
            "name": "KAY/O",
            "profile_icon": "/images/agents/kayo/profile-icon.png"
        })
    );
}

#[tokio::test]
async fn test_list_agents() {
    let (status, body) = get(bundled_app(), "/api/agents").await;

    assert_eq!(status, StatusCode::OK);
    let agents = body.as_array().unwrap();
    assert_eq!(agents.len(), 4);

    let ids: Vec<i64> = agents
        .iter()
        .map(|a| a["agent_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 17]);
}

#[tokio::test]
async fn test_data_source_failure_does_not_leak_details() {
    let (status, body) = get(unreachable_app(), "/api/agent/id/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch agent"}));

    let (status, body) = get(unreachable_app(), "/api/agents/Brimstone/profile-icon").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch agent profile icon"}));

    let (status, body) = get(unreachable_app(), "/api/agents").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch agents"}));
}

#[tokio::test]
async fn test_validation_precedes_data_source() {
    let (status, body) = get(unreachable_app(), "/api/agent/id/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid agent ID format"}));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(bundled_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data_source"], "static");

    let (_, body) = get(unreachable_app(), "/health").await;
    assert_eq!(body["data_source"], "postgres");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get(bundled_app(), "/api-doc/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/agent/id/{id}/profile-icon"].is_object());
}

#[tokio::test]
async fn test_api_prefix() {
    let config = ServerConfig {
        api_prefix: "/v1".to_string(),
        ..Default::default()
    };
    let backend = Arc::new(StorageBackend::bundled().unwrap());
    let app = router(backend, &config);

    let (status, body) = get(app.clone(), "/v1/api/agents/phoenix").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agent_id"], 2);

    let (status, _) = get(app.clone(), "/api/agents/phoenix").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Health stays at the root
    let (status, _) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
