//! Student roll number, the identifier used for every login and logout.

use std::fmt;

use serde::Serialize;

use crate::error::AppError;
use crate::result::AppResult;

/// Message returned when a request carries no usable roll number.
pub const ROLL_NUMBER_REQUIRED: &str = "Roll Number is required.";

/// A trimmed, non-empty roll number.
///
/// The value is opaque: `"007"` and `"7"` are different students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RollNumber(String);

impl RollNumber {
    /// Parse a raw roll number, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation(ROLL_NUMBER_REQUIRED));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Return the roll number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RollNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for RollNumber {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for RollNumber {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
