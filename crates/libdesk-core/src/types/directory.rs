//! Student directory entry.

use serde::Serialize;

use super::roll_number::RollNumber;

/// A roll number together with the student's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Roll number.
    pub roll_no: RollNumber,
    /// Display name.
    pub name: String,
}

impl DirectoryEntry {
    /// Create a new directory entry.
    pub fn new(roll_no: RollNumber, name: impl Into<String>) -> Self {
        Self {
            roll_no,
            name: name.into(),
        }
    }
}
