//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Every section has defaults, so an empty configuration
//! yields a working single-node server with a 25-PC pool.

pub mod app;
pub mod database;
pub mod directory;
pub mod logging;
pub mod occupancy;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::directory::DirectoryConfig;
pub use self::logging::LoggingConfig;
pub use self::occupancy::OccupancyConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (default.toml + environment overlay + `LIBDESK__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Student directory database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// PC pool settings.
    #[serde(default)]
    pub occupancy: OccupancyConfig,
    /// Directory lookup cache settings.
    #[serde(default)]
    pub directory: DirectoryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the named environment.
    ///
    /// Merges `config/default`, the `config/{env}` overlay and environment
    /// variables such as `LIBDESK__OCCUPANCY__TOTAL_PCS`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        Self::finish(builder)
    }

    /// Load configuration from an explicit file path plus environment variables.
    ///
    /// The file must exist.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(true));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix("LIBDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.occupancy.total_pcs == 0 {
            return Err(AppError::configuration(
                "occupancy.total_pcs must be greater than zero",
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration("database.url must not be empty"));
        }
        Ok(())
    }
}
