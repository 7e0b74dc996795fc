//! Server wiring: directory, tracker, router, listener, graceful shutdown.

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::{error, info};

use libdesk_core::config::AppConfig;
use libdesk_core::error::AppError;
use libdesk_core::traits::DirectoryLookup;
use libdesk_database::DatabasePool;
use libdesk_database::repositories::StudentRepository;
use libdesk_occupancy::{CachedDirectory, SqlDirectory};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the directory lookup for the configured database, cached if enabled.
pub fn build_directory(config: &AppConfig, pool: SqlitePool) -> Arc<dyn DirectoryLookup> {
    let repo = Arc::new(StudentRepository::new(pool));
    let sql: Arc<dyn DirectoryLookup> = Arc::new(SqlDirectory::new(repo));

    if config.directory.cache_enabled {
        info!(
            ttl_seconds = config.directory.cache_ttl_seconds,
            max_entries = config.directory.cache_max_entries,
            "Directory cache enabled"
        );
        Arc::new(CachedDirectory::new(sql, &config.directory))
    } else {
        sql
    }
}

/// Runs the LibDesk server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig, pool: SqlitePool) -> Result<(), AppError> {
    let directory = build_directory(&config, pool.clone());
    let addr = config.server.bind_address();
    let total_pcs = config.occupancy.total_pcs;

    let state = AppState::new(config, directory).with_database(DatabasePool::from(pool));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!(address = %addr, total_pcs = total_pcs, "LibDesk server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    info!("LibDesk server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
