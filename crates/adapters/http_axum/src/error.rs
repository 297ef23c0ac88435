//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use climadash_domain::actuator::UnknownActuator;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Request errors. Every variant is the caller's fault and maps to `400`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path segment names no known actuator.
    #[error(transparent)]
    Actuator(#[from] UnknownActuator),
    /// Switch state other than `on` or `off`.
    #[error("unknown state `{0}`, expected `on` or `off`")]
    State(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejecting request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Parse an `on`/`off` path segment.
///
/// # Errors
///
/// Returns [`ApiError::State`] for anything else.
pub fn parse_switch(state: &str) -> Result<bool, ApiError> {
    match state {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(ApiError::State(other.to_string())),
    }
}
