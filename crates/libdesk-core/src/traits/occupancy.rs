//! Occupancy tracker trait for the shared PC pool.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::{OccupancyStatus, RollNumber};

/// Result of attempting to take a PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginOutcome {
    /// The roll number now holds a PC.
    Admitted,
    /// The roll number already held a PC; nothing changed.
    AlreadyActive,
    /// Every PC is occupied; nothing changed.
    CapacityExceeded,
}

/// Result of attempting to give a PC back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoutOutcome {
    /// The PC was released.
    Released,
    /// The roll number held no PC; nothing changed.
    NotActive,
}

/// Bounded set of roll numbers currently using a PC.
///
/// Implementations must make the duplicate check, the capacity check and
/// the insertion a single atomic step with respect to every other call.
#[async_trait]
pub trait OccupancyTracker: Send + Sync + std::fmt::Debug {
    /// Try to take a PC for the given roll number.
    async fn login(&self, roll_no: &RollNumber) -> AppResult<LoginOutcome>;

    /// Release the PC held by the given roll number.
    async fn logout(&self, roll_no: &RollNumber) -> AppResult<LogoutOutcome>;

    /// Current pool status.
    async fn status(&self) -> AppResult<OccupancyStatus>;
}
