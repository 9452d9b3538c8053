use async_trait::async_trait;
use deadpool_postgres::{Config, Object, Pool, PoolConfig, Runtime, Timeouts};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tracing::{error, info, warn};

use super::{RelationalStore, SqlParams};
use crate::config::DatabaseConfig;
use crate::error::{StartupError, StoreError};

/// PostgreSQL-backed relational store.
/// Wraps a deadpool `Pool`; every call borrows one connection for the duration
/// of a single statement.
#[derive(Clone)]
pub struct PostgresStore {
    pool: Pool,
}

impl PostgresStore {
    /// Builds the connection pool and verifies it with a round trip before
    /// returning, so an unreachable database fails startup instead of the
    /// first request.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        info!(
            "Creating PostgreSQL connection pool for host: {}:{}",
            config.host, config.port
        );

        let pool = Self::create_pool(config)?;

        let store = PostgresStore { pool };
        store
            .test_connection()
            .await
            .map_err(|e| StartupError::Postgres(e.to_string()))?;

        Ok(store)
    }

    fn create_pool(config: &DatabaseConfig) -> Result<Pool, StartupError> {
        let mut pg_config = Config::new();

        pg_config.host = Some(config.host.clone());
        pg_config.port = Some(config.port);
        pg_config.dbname = Some(config.database.clone());
        pg_config.user = Some(config.username.clone());
        if !config.password.is_empty() {
            pg_config.password = Some(config.password.clone());
        }

        pg_config.ssl_mode = Some(match config.ssl_mode.as_str() {
            "disable" => deadpool_postgres::SslMode::Disable,
            "prefer" => deadpool_postgres::SslMode::Prefer,
            "require" => deadpool_postgres::SslMode::Require,
            other => {
                warn!("Unknown SSL mode '{}', defaulting to 'require'", other);
                deadpool_postgres::SslMode::Require
            }
        });

        pg_config.manager = Some(deadpool_postgres::ManagerConfig {
            recycling_method: deadpool_postgres::RecyclingMethod::Fast,
        });

        let mut timeouts = Timeouts::default();
        timeouts.wait = Some(config.connection_timeout);
        timeouts.create = Some(config.connection_timeout);
        timeouts.recycle = Some(config.connection_timeout);

        let mut pool_config = PoolConfig::new(config.max_connections as usize);
        pool_config.timeouts = timeouts;
        pg_config.pool = Some(pool_config);

        let tls_connector = TlsConnector::builder().build().map_err(|e| {
            error!("Failed to create TLS connector: {}", e);
            StartupError::Postgres(format!("TLS connector creation failed: {}", e))
        })?;
        let tls = MakeTlsConnector::new(tls_connector);

        pg_config
            .create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                StartupError::Postgres(format!("Connection pool creation failed: {}", e))
            })
    }

    async fn get_connection(&self) -> Result<Object, StoreError> {
        self.pool.get().await.map_err(StoreError::from)
    }

    pub async fn test_connection(&self) -> Result<(), StoreError> {
        let client = self.get_connection().await?;

        client.execute("SELECT 1", &[]).await.map_err(|e| {
            error!("Database connection test failed: {}", e);
            StoreError::from(e)
        })?;

        info!("Database connection test successful");
        Ok(())
    }
}

#[async_trait]
impl RelationalStore for PostgresStore {
    async fn execute(&self, statement: &str, params: SqlParams<'_>) -> Result<u64, StoreError> {
        let client = self.get_connection().await?;

        let affected = client.execute(statement, params).await?;
        Ok(affected)
    }

    async fn query_scalar(&self, statement: &str, params: SqlParams<'_>) -> Result<i64, StoreError> {
        let client = self.get_connection().await?;

        let row = client.query_one(statement, params).await?;
        let value: i64 = row.try_get(0)?;
        Ok(value)
    }
}
