use anyhow::Context;
use lightbnb_db::{DbConfig, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lightbnb_db=debug,lightbnb_migrate=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = DbConfig::from_env().context("Invalid database configuration")?;
    tracing::info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        statement_timeout_ms = ?config.statement_timeout_ms,
        "Loaded database configuration"
    );

    // --- Database ---
    let pool = lightbnb_db::create_pool_with_config(&config)
        .await
        .context("Failed to connect to database")?;
    let store = Store::new(pool);
    tracing::info!("Database connection pool created");

    let outcome = migrate(&store).await;

    // Release connections whether or not migration succeeded.
    store.close().await;
    outcome
}

async fn migrate(store: &Store) -> anyhow::Result<()> {
    store
        .health_check()
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    lightbnb_db::run_migrations(store.pool())
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");
    Ok(())
}
