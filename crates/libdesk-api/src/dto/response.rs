//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use libdesk_core::types::OccupancyStatus;

/// `{success, message}` body returned by login and logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the request changed the pool.
    pub success: bool,
    /// Message for the student.
    pub message: String,
}

impl MessageResponse {
    /// A successful outcome.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A rejected request.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// PCs in the library.
    pub total_pcs: u32,
    /// PCs held by a student.
    pub pcs_in_use: u32,
    /// PCs free.
    pub pcs_available: u32,
}

impl From<OccupancyStatus> for StatusResponse {
    fn from(status: OccupancyStatus) -> Self {
        Self {
            total_pcs: status.capacity,
            pcs_in_use: status.in_use,
            pcs_available: status.available,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Server start time.
    pub started_at: DateTime<Utc>,
    /// Seconds since start.
    pub uptime_seconds: u64,
    /// Directory database reachability, omitted when no database is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}
