use std::net::SocketAddr;

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure reported by one of the backing stores during a request.
/// The message is the backend's own text; it is surfaced to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    KeyValue(String),

    #[error("{0}")]
    Relational(String),
}

impl StoreError {
    pub fn key_value(message: impl Into<String>) -> Self {
        Self::KeyValue(message.into())
    }

    pub fn relational(message: impl Into<String>) -> Self {
        Self::Relational(message.into())
    }
}

// Redis error mapping
impl From<deadpool_redis::redis::RedisError> for StoreError {
    fn from(err: deadpool_redis::redis::RedisError) -> Self {
        tracing::error!("Redis command failed: {}", err);
        StoreError::KeyValue(err.to_string())
    }
}

impl From<deadpool_redis::PoolError> for StoreError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        tracing::error!("Redis connection pool error: {}", err);
        StoreError::KeyValue(err.to_string())
    }
}

// PostgreSQL error mapping
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        tracing::error!("PostgreSQL error: {} (code: {:?})", err, err.code());
        StoreError::Relational(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        match err {
            deadpool_postgres::PoolError::Timeout(_) => {
                tracing::warn!("Database connection pool timeout: {}", err);
            }
            _ => {
                tracing::error!("Database connection pool error: {}", err);
            }
        }
        StoreError::Relational(err.to_string())
    }
}

/// Request-time failures. Each variant maps to exactly one HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Failing to read the request body at all is still a client error.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Store failures were already logged when converted from the backend error
        if let ApiError::Validation(ref message) = self {
            tracing::debug!("Rejected request: {}", message);
        }

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

/// Fatal errors raised while bringing the service up.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),

    #[error("Failed to load configuration: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("Failed to connect to PostgreSQL: {0}")]
    Postgres(String),

    #[error("Failed to connect to Redis: {0}")]
    Redis(String),

    #[error("Failed to bind to address {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;
