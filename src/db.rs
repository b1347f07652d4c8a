//! Database module
//!
//! Connection and schema checks run at startup.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Table the event store reads and writes
pub const EVENTS_TABLE: &str = "events";

/// Open a pool sized from the configuration.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
}

/// Simple connectivity check
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Check that the events table exists
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema() AND table_name = $1
        )
        "#,
    )
    .bind(EVENTS_TABLE)
    .fetch_one(pool)
    .await?;

    if !exists {
        tracing::error!("Required table '{}' does not exist", EVENTS_TABLE);
    }

    Ok(exists)
}
