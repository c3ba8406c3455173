//! Schema bootstrap

use sqlx::PgPool;
use tracing::info;

/// Bundled schema, applied as a single multi-statement batch
const INIT_SQL: &str = include_str!("../../migrations/0001_init.sql");

/// Create any missing tables and indexes
///
/// # Errors
/// Returns an error if a statement fails
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(INIT_SQL).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
