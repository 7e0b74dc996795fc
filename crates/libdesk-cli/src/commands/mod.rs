//! CLI command definitions and dispatch.

pub mod migrate;
pub mod seed;
pub mod serve;
pub mod student;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use libdesk_core::config::AppConfig;
use libdesk_core::error::AppError;
use libdesk_database::DatabasePool;

/// LibDesk: library PC occupancy service
#[derive(Debug, Parser)]
#[command(name = "libdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the LibDesk server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Load students into the directory
    Seed(seed::SeedArgs),
    /// Inspect the student directory
    Student(student::StudentArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Seed(args) => seed::execute(args, &self.config).await,
            Commands::Student(args) => student::execute(args, &self.config, self.format).await,
        }
    }

    /// Whether this invocation runs the long-lived server.
    pub fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::SqlitePool, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
