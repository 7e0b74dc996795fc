//! Embedded schema migrations for the student directory.

use std::collections::HashSet;

use serde::Serialize;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use tracing::info;

use libdesk_core::error::{AppError, ErrorKind};

/// Migrations compiled in from the workspace `migrations/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// One known migration and whether the database has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    /// Migration version (timestamp prefix of the file name).
    pub version: i64,
    /// Description taken from the file name.
    pub description: String,
    /// Whether it has been applied successfully.
    pub applied: bool,
}

/// Run all pending database migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let pending = migration_status(pool)
        .await?
        .iter()
        .filter(|m| !m.applied)
        .count();

    if pending == 0 {
        info!("Database schema is up to date");
        return Ok(());
    }

    info!(pending = pending, "Applying database migrations");
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!(applied = pending, "Database migrations completed");
    Ok(())
}

/// List every embedded migration with its applied state.
pub async fn migration_status(pool: &SqlitePool) -> Result<Vec<MigrationStatus>, AppError> {
    let tracked: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| database_error("Failed to inspect schema", e))?;

    let applied: HashSet<i64> = if tracked > 0 {
        sqlx::query_scalar::<_, i64>("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await
            .map_err(|e| database_error("Failed to read applied migrations", e))?
            .into_iter()
            .collect()
    } else {
        HashSet::new()
    };

    Ok(MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}

fn database_error(context: &str, e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("{context}: {e}"), e)
}
