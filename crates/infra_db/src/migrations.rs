//! Embedded schema migrations

use tracing::info;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Applies the embedded migrations from the workspace `migrations/` directory
///
/// Already-applied migrations are skipped, so this is safe to run on every
/// startup.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

    info!("Database migrations applied");
    Ok(())
}
