//! Database migration management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use libdesk_core::error::AppError;
use libdesk_database::migration::MigrationStatus;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show which migrations are applied
    Status,
}

/// Migration display row for table output
#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    /// Version
    version: i64,
    /// Description
    description: String,
    /// Applied or pending
    state: &'static str,
}

impl From<MigrationStatus> for MigrationRow {
    fn from(status: MigrationStatus) -> Self {
        Self {
            version: status.version,
            description: status.description,
            state: if status.applied { "applied" } else { "pending" },
        }
    }
}

/// Execute migration commands
pub async fn execute(
    args: &MigrateArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            libdesk_database::migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let rows: Vec<MigrationRow> = libdesk_database::migration::migration_status(&pool)
                .await?
                .into_iter()
                .map(MigrationRow::from)
                .collect();
            output::print_list(&rows, format);
        }
    }

    pool.close().await;
    Ok(())
}
