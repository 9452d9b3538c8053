// Store capabilities
// The narrow interfaces handlers use to reach the external stores

pub mod postgres;
pub mod redis;

use async_trait::async_trait;
use tokio_postgres::types::ToSql;

use crate::error::StoreError;

pub use postgres::PostgresStore;
pub use redis::RedisStore;

/// Parameters bound to `$1`, `$2`, ... of a relational statement.
pub type SqlParams<'a> = &'a [&'a (dyn ToSql + Sync)];

/// Atomic counters held in a key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Adds `delta` to the counter named `key` (a missing counter starts at 0)
    /// and returns the resulting value.
    async fn incr_by(&self, key: &str, delta: i64) -> Result<i64, StoreError>;
}

/// Statement execution against a relational database.
#[async_trait]
pub trait RelationalStore: Send + Sync {
    /// Runs a statement that produces no rows; returns the affected row count.
    async fn execute(&self, statement: &str, params: SqlParams<'_>) -> Result<u64, StoreError>;

    /// Runs a statement that must yield exactly one row and returns the first
    /// column of that row as an integer.
    async fn query_scalar(&self, statement: &str, params: SqlParams<'_>) -> Result<i64, StoreError>;
}
