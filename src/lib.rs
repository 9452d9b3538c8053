// Library root for the counter / signing / users API

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod signing;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use error::{ApiError, StartupError, StoreError};
pub use router::create_router;
pub use state::AppState;
pub use store::{KeyValueStore, PostgresStore, RedisStore, RelationalStore};
