//! Directory lookup trait: roll number to display name.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::RollNumber;

/// Read-only resolution of roll numbers to student names.
///
/// Implementations are shared across request tasks without extra locking.
/// An unknown roll number is `Ok(None)`; `Err` is reserved for backend
/// failures.
#[async_trait]
pub trait DirectoryLookup: Send + Sync + std::fmt::Debug {
    /// Resolve a roll number to the student's display name.
    async fn resolve(&self, roll_no: &RollNumber) -> AppResult<Option<String>>;
}
