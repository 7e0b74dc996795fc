//! Student directory CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use libdesk_core::error::AppError;
use libdesk_database::repositories::{StudentRecord, StudentRepository};

/// Arguments for student commands
#[derive(Debug, Args)]
pub struct StudentArgs {
    /// Student subcommand
    #[command(subcommand)]
    pub command: StudentCommand,
}

/// Student subcommands
#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// List every student in the directory
    List,
    /// Show a single student
    Show {
        /// Roll number
        roll_no: String,
    },
}

/// Student display row for table output
#[derive(Debug, Serialize, Tabled)]
struct StudentRow {
    /// Roll number
    roll_no: String,
    /// Display name
    name: String,
}

impl From<StudentRecord> for StudentRow {
    fn from(record: StudentRecord) -> Self {
        Self {
            roll_no: record.roll_no,
            name: record.name,
        }
    }
}

/// Execute student commands
pub async fn execute(
    args: &StudentArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let repo = StudentRepository::new(pool.clone());

    let result = match &args.command {
        StudentCommand::List => {
            let rows: Vec<StudentRow> = repo
                .list_all()
                .await?
                .into_iter()
                .map(StudentRow::from)
                .collect();
            output::print_list(&rows, format);
            Ok(())
        }
        StudentCommand::Show { roll_no } => match repo.find_by_roll_no(roll_no.trim()).await? {
            Some(record) => {
                output::print_item(&StudentRow::from(record), format);
                Ok(())
            }
            None => Err(AppError::unknown_identifier(format!(
                "Student '{}' not found",
                roll_no.trim()
            ))),
        },
    };

    pool.close().await;
    result
}
