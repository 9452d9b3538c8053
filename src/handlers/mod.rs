// Handlers module
// HTTP handlers for the REST API

pub mod counter;
pub mod sign;
pub mod users;

use axum::{http::StatusCode, response::IntoResponse};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Decodes a JSON request body. The `Content-Type` header is not checked,
/// so clients that omit it are served the same as those that send it.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(format!("Invalid request body: {}", e)))
}

/// Health check handler
/// Returns "OK" with 200 status for monitoring purposes
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
