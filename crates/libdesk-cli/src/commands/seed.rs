//! Seed the student directory.

use std::path::PathBuf;

use clap::Args;

use crate::output;
use libdesk_core::error::AppError;
use libdesk_database::repositories::StudentRepository;
use libdesk_database::seed;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Roster file with one `roll_no,name` pair per line.
    /// The built-in roster is used when omitted.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    if config.database.auto_migrate {
        libdesk_database::migration::run_migrations(&pool).await?;
    }

    let roster = match &args.file {
        Some(path) => {
            let contents = tokio::fs::read_to_string(path).await?;
            seed::parse_roster(&contents)?
        }
        None => seed::default_roster(),
    };

    if roster.is_empty() {
        output::print_warning("Roster is empty, nothing to insert.");
        pool.close().await;
        return Ok(());
    }

    let repo = StudentRepository::new(pool.clone());
    let inserted = repo.insert_ignore_many(&roster).await?;
    let skipped = roster.len() as u64 - inserted;

    output::print_success(&format!("Inserted {} student(s)", inserted));
    if skipped > 0 {
        output::print_kv("Skipped", &format!("{} already present", skipped));
    }
    output::print_kv("Total", &repo.count().await?.to_string());

    pool.close().await;
    Ok(())
}
