//! Aggregate PC pool status.

use serde::{Deserialize, Serialize};

/// Snapshot of the PC pool.
///
/// Always satisfies `in_use + available == capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStatus {
    /// Total PCs in the pool.
    pub capacity: u32,
    /// PCs currently held by a student.
    pub in_use: u32,
    /// PCs free for a new login.
    pub available: u32,
}

impl OccupancyStatus {
    /// Build a status from the pool size and the number of active sessions.
    ///
    /// `in_use` above `capacity` means the pool was over-admitted.
    pub fn new(capacity: u32, in_use: u32) -> Self {
        debug_assert!(
            in_use <= capacity,
            "over-admitted pool: {in_use} in use of {capacity}"
        );
        Self {
            capacity,
            in_use,
            available: capacity.saturating_sub(in_use),
        }
    }
}
