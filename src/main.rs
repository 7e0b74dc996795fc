//! LibDesk Server: library PC occupancy service
//!
//! Main entry point: loads configuration, initializes logging, opens the
//! student directory and serves the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use libdesk_core::config::AppConfig;
use libdesk_core::error::AppError;
use libdesk_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(total_pcs = config.occupancy.total_pcs, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `LIBDESK_CONFIG` if set, otherwise from
/// `config/default.toml` overlaid with `config/{LIBDESK_ENV}.toml`.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("LIBDESK_CONFIG") {
        return AppConfig::load_file(&path);
    }

    let env = std::env::var("LIBDESK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LibDesk v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;

    if config.database.auto_migrate {
        libdesk_database::migration::run_migrations(db.pool()).await?;
    }

    let students = libdesk_database::repositories::StudentRepository::new(db.pool().clone())
        .count()
        .await?;
    if students == 0 {
        tracing::warn!("Student directory is empty; run `libdesk-cli seed` to provision it");
    } else {
        tracing::info!(students = students, "Student directory ready");
    }

    let result = libdesk_api::run_server(config, db.pool().clone()).await;
    db.close().await;
    result
}
