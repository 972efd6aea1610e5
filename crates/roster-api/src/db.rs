//! # Database Bootstrap
//!
//! Pool construction and embedded migrations. The pool is the only shared
//! resource across requests; it is safe for concurrent use and is passed
//! by injection into the repository — the core holds no connection state
//! of its own.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

/// Initialize the database connection pool and run migrations.
///
/// Returns `Err` if the connection or a migration fails; the caller
/// decides whether to degrade to a disconnected repository or abort.
pub async fn init_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(config.connect_options())
        .await?;

    tracing::info!(
        host = %config.db_host,
        database = %config.db_name,
        "Connected to PostgreSQL"
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
