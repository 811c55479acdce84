//! Connection pool management.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use bb_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from the database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;

    info!(
        "database pool ready (max {} connections)",
        config.max_connections
    );
    Ok(pool)
}

/// Apply the bundled SQL migrations
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("database migrations applied");
    Ok(())
}
