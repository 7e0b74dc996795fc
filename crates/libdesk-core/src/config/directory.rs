//! Directory lookup cache configuration.

use serde::{Deserialize, Serialize};

/// Read-through cache in front of the student table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Whether resolved names are cached in memory.
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
    /// Time-to-live for cached entries in seconds.
    #[serde(default = "default_ttl")]
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached entries.
    #[serde(default = "default_max_entries")]
    pub cache_max_entries: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl_seconds: default_ttl(),
            cache_max_entries: default_max_entries(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ttl() -> u64 {
    300
}

fn default_max_entries() -> u64 {
    10_000
}
