//! Convenience result type alias for LibDesk.

use crate::error::AppError;

/// A specialized `Result` type for LibDesk operations.
pub type AppResult<T> = Result<T, AppError>;
