//! In-memory occupancy tracker guarded by a Tokio mutex.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use libdesk_core::result::AppResult;
use libdesk_core::traits::{LoginOutcome, LogoutOutcome, OccupancyTracker};
use libdesk_core::types::{OccupancyStatus, RollNumber};

/// State behind the lock.
#[derive(Debug)]
struct InnerState {
    /// Roll numbers currently holding a PC.
    active: HashSet<RollNumber>,
}

/// In-memory occupancy tracker.
///
/// Clones share the same pool; separate `new` calls create independent pools.
#[derive(Debug, Clone)]
pub struct MemoryOccupancyTracker {
    /// Fixed number of PCs.
    capacity: u32,
    /// Protected inner state.
    state: Arc<Mutex<InnerState>>,
}

impl MemoryOccupancyTracker {
    /// Creates a tracker for a pool of `capacity` PCs, all free.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            state: Arc::new(Mutex::new(InnerState {
                active: HashSet::with_capacity(capacity as usize),
            })),
        }
    }

    /// Pool size.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Roll numbers currently holding a PC, sorted.
    pub async fn active(&self) -> Vec<RollNumber> {
        let state = self.state.lock().await;
        let mut active: Vec<RollNumber> = state.active.iter().cloned().collect();
        active.sort();
        active
    }
}

#[async_trait]
impl OccupancyTracker for MemoryOccupancyTracker {
    async fn login(&self, roll_no: &RollNumber) -> AppResult<LoginOutcome> {
        let mut state = self.state.lock().await;

        if state.active.contains(roll_no) {
            debug!(roll_no = %roll_no, "Login rejected: already active");
            return Ok(LoginOutcome::AlreadyActive);
        }

        let in_use = state.active.len() as u32;
        if in_use >= self.capacity {
            warn!(
                roll_no = %roll_no,
                in_use = in_use,
                capacity = self.capacity,
                "Login rejected: no PCs available"
            );
            return Ok(LoginOutcome::CapacityExceeded);
        }

        state.active.insert(roll_no.clone());
        info!(
            roll_no = %roll_no,
            in_use = state.active.len(),
            capacity = self.capacity,
            "PC taken"
        );

        Ok(LoginOutcome::Admitted)
    }

    async fn logout(&self, roll_no: &RollNumber) -> AppResult<LogoutOutcome> {
        let mut state = self.state.lock().await;

        if state.active.remove(roll_no) {
            info!(
                roll_no = %roll_no,
                in_use = state.active.len(),
                capacity = self.capacity,
                "PC released"
            );
            Ok(LogoutOutcome::Released)
        } else {
            debug!(roll_no = %roll_no, "Logout rejected: not active");
            Ok(LogoutOutcome::NotActive)
        }
    }

    async fn status(&self) -> AppResult<OccupancyStatus> {
        let state = self.state.lock().await;
        Ok(OccupancyStatus::new(
            self.capacity,
            state.active.len() as u32,
        ))
    }
}
