// Counter handlers
// HTTP handler for atomic counter increments

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    handlers::parse_json,
    models::counter::{CounterRequest, CounterResponse},
    state::AppState,
};

/// Add a delta to a counter
/// POST /redis/incr
pub async fn increment_counter(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<impl IntoResponse> {
    let request: CounterRequest = parse_json(&body?)?;
    request.validate().map_err(ApiError::Validation)?;

    info!("Incrementing counter '{}' by {}", request.key, request.value);

    let value = state.counters.incr_by(&request.key, request.value).await?;

    info!("Counter '{}' is now {}", request.key, value);
    Ok((StatusCode::OK, Json(CounterResponse { value })))
}
