//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use libdesk_core::config::AppConfig;
use libdesk_core::traits::DirectoryLookup;
use libdesk_database::DatabasePool;
use libdesk_occupancy::{LibraryService, MemoryOccupancyTracker};

/// State injected into every handler through Axum's `State` extractor.
///
/// Each `AppState` built with [`AppState::new`] owns its own PC pool, so
/// tests and embedded servers never share occupancy.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Login/logout service (directory + occupancy tracker)
    pub library: Arc<LibraryService>,
    /// When this state was built
    pub started_at: DateTime<Utc>,
    /// Directory database, probed by the health check when present
    pub db: Option<DatabasePool>,
}

impl AppState {
    /// Builds state with a fresh, empty pool sized by `config.occupancy.total_pcs`.
    pub fn new(config: AppConfig, directory: Arc<dyn DirectoryLookup>) -> Self {
        let tracker = Arc::new(MemoryOccupancyTracker::new(config.occupancy.total_pcs));
        let library = Arc::new(LibraryService::new(directory, tracker));

        Self {
            config: Arc::new(config),
            library,
            started_at: Utc::now(),
            db: None,
        }
    }

    /// Attach the directory database so `/api/health` reports on it.
    pub fn with_database(mut self, db: DatabasePool) -> Self {
        self.db = Some(db);
        self
    }
}
