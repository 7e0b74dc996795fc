//! PC pool configuration.

use serde::{Deserialize, Serialize};

/// Size of the shared PC pool.
///
/// Fixed for the lifetime of the process; there is no runtime resize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyConfig {
    /// Number of PCs available to students.
    #[serde(default = "default_total_pcs")]
    pub total_pcs: u32,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            total_pcs: default_total_pcs(),
        }
    }
}

fn default_total_pcs() -> u32 {
    25
}
