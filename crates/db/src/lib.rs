use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod store;

pub use config::DbConfig;
pub use error::{StoreError, StoreResult};
pub use store::Store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL with default settings.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    create_pool_with_config(&DbConfig::new(database_url)).await
}

/// Create a connection pool from a full [`DbConfig`].
///
/// When `statement_timeout_ms` is set it is applied as a session option on
/// every connection the pool opens.
pub async fn create_pool_with_config(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.database_url)?;
    if let Some(ms) = config.statement_timeout_ms {
        options = options.options([("statement_timeout", ms.to_string())]);
    }

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
