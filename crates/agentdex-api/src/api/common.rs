// Common DTOs and error mapping for the public API

use agentdex_core::LookupError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    #[schema(example = "Agent not found")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Handler error carrying the status and the client-facing message.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Map a lookup failure to a response.
    ///
    /// Server-side failures are logged with their cause and answered with
    /// `failure_message` only.
    pub fn from_lookup(err: LookupError, failure_message: &str) -> Self {
        match err {
            LookupError::InvalidInput(invalid) => {
                Self::new(StatusCode::BAD_REQUEST, invalid.to_string())
            }
            LookupError::NotFound => Self::new(StatusCode::NOT_FOUND, "Agent not found"),
            err @ (LookupError::DataSource(_) | LookupError::Unexpected(_)) => {
                tracing::error!(error = %err, "{}", failure_message);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}
