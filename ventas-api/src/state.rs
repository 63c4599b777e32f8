//! Application state

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// MySQL connection pool (warehouse)
    pub pool: MySqlPool,
    /// Whether reports that historically leaked driver errors still do
    pub expose_error_detail: bool,
}

impl AppState {
    /// Create a new AppState, connecting the pool eagerly
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let statement_timeout_ms = config.statement_timeout_ms;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .after_connect(move |conn, _meta| {
                Box::pin(async move {
                    if statement_timeout_ms > 0 {
                        // Integer from config, never user input
                        let sql = format!("SET SESSION MAX_EXECUTION_TIME = {statement_timeout_ms}");
                        sqlx::query(&sql).execute(&mut *conn).await?;
                    }
                    Ok(())
                })
            })
            .connect(&config.database_url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            statement_timeout_ms,
            "Warehouse pool ready"
        );

        Ok(Self::with_pool(pool, config.expose_error_detail))
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: MySqlPool, expose_error_detail: bool) -> Self {
        Self {
            pool,
            expose_error_detail,
        }
    }

    /// Drain the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Warehouse pool closed");
    }
}
