// Health endpoint

use axum::{extract::State, Json};
use serde::Serialize;

/// State for health endpoint
#[derive(Clone)]
pub struct HealthState {
    pub data_source: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    data_source: &'static str,
}

pub async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        data_source: state.data_source,
    })
}
