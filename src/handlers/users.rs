// User handlers
// HTTP handler for user creation

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
    models::user::{UserRequest, UserResponse},
    state::AppState,
};

pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT,
        age INT
    )
"#;

// `id` is SERIAL (int4). `PostgresStore::query_scalar` reads column 0 as
// i64, which only matches an int8 column, hence the `::BIGINT` cast.
pub const INSERT_USER: &str = "INSERT INTO users (name, age) VALUES ($1, $2) RETURNING id::BIGINT";

/// Create a new user
/// POST /postgres/users
///
/// The table is (re)created idempotently before every insert. A failed insert
/// after a successful create leaves the table in place.
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<impl IntoResponse> {
    let request: UserRequest = parse_json(&body?)?;
    request.validate().map_err(ApiError::Validation)?;

    info!("Creating new user with name: {}", request.name);

    state.database.execute(CREATE_USERS_TABLE, &[]).await?;

    let id = state
        .database
        .query_scalar(INSERT_USER, &[&request.name, &request.age])
        .await?;

    info!("Successfully created user with id: {}", id);
    Ok((StatusCode::OK, Json(UserResponse { id })))
}
