use async_trait::async_trait;
use deadpool_redis::redis::{self, AsyncCommands};
use deadpool_redis::{Config, Connection, Pool, PoolConfig, Runtime};
use tracing::{error, info};

use super::KeyValueStore;
use crate::config::RedisConfig;
use crate::error::{StartupError, StoreError};

/// Redis-backed counter store.
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
}

impl RedisStore {
    /// Builds the pool and sends a `PING` so that an unreachable server is
    /// reported at startup.
    pub async fn connect(config: &RedisConfig) -> Result<Self, StartupError> {
        let url = config.to_connection_string();
        info!("Creating Redis connection pool for {}:{}", config.host, config.port);

        let mut redis_config = Config::from_url(url);
        redis_config.pool = Some(PoolConfig::new(config.max_connections as usize));

        let pool = redis_config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| {
                error!("Failed to create Redis connection pool: {}", e);
                StartupError::Redis(format!("Connection pool creation failed: {}", e))
            })?;

        let store = RedisStore { pool };
        store
            .ping()
            .await
            .map_err(|e| StartupError::Redis(e.to_string()))?;

        Ok(store)
    }

    async fn get_connection(&self) -> Result<Connection, StoreError> {
        self.pool.get().await.map_err(StoreError::from)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.get_connection().await?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;

        info!("Redis connection test successful");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn incr_by(&self, key: &str, delta: i64) -> Result<i64, StoreError> {
        let mut conn = self.get_connection().await?;

        // INCRBY is atomic on the server; a missing key is treated as 0
        let value: i64 = conn.incr(key, delta).await?;
        Ok(value)
    }
}
