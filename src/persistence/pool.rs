//! Database pool and migrations.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::error::OrderError;

/// Create a pool from the configured `DATABASE_URL` and run migrations.
pub async fn create_pool_and_migrate(config: &Config) -> Result<PgPool, OrderError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Run embedded migrations (schema plus the order status seed).
pub async fn run_migrations(pool: &PgPool) -> Result<(), OrderError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
