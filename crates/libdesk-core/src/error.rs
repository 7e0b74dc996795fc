//! Unified application error types for LibDesk.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The first six kinds are expected,
//! user-facing outcomes of a login/logout request; the rest are
//! infrastructure failures.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Required input was missing or empty.
    Validation,
    /// The roll number is not present in the student directory.
    UnknownIdentifier,
    /// The student already holds a PC.
    AlreadyActive,
    /// The student does not hold a PC.
    NotActive,
    /// Every PC in the pool is occupied.
    CapacityExceeded,
    /// The request body exceeded the configured size limit.
    PayloadTooLarge,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind is an expected outcome reported back to the student
    /// with its own message, as opposed to an infrastructure failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation
                | Self::UnknownIdentifier
                | Self::AlreadyActive
                | Self::NotActive
                | Self::CapacityExceeded
                | Self::PayloadTooLarge
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::UnknownIdentifier => write!(f, "UNKNOWN_IDENTIFIER"),
            Self::AlreadyActive => write!(f, "ALREADY_ACTIVE"),
            Self::NotActive => write!(f, "NOT_ACTIVE"),
            Self::CapacityExceeded => write!(f, "CAPACITY_EXCEEDED"),
            Self::PayloadTooLarge => write!(f, "PAYLOAD_TOO_LARGE"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout LibDesk.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an unknown-identifier error.
    pub fn unknown_identifier(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownIdentifier, message)
    }

    /// Create an already-active error.
    pub fn already_active(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyActive, message)
    }

    /// Create a not-active error.
    pub fn not_active(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotActive, message)
    }

    /// Create a capacity-exceeded error.
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapacityExceeded, message)
    }

    /// Create a payload-too-large error.
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PayloadTooLarge, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if this is a user-facing outcome.
    pub fn is_user_facing(&self) -> bool {
        self.kind.is_user_facing()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::capacity_exceeded("No PCs available.");
        assert_eq!(err.to_string(), "CAPACITY_EXCEEDED: No PCs available.");
    }

    #[test]
    fn test_user_facing_kinds() {
        assert!(AppError::validation("x").is_user_facing());
        assert!(AppError::unknown_identifier("x").is_user_facing());
        assert!(AppError::already_active("x").is_user_facing());
        assert!(AppError::not_active("x").is_user_facing());
        assert!(AppError::capacity_exceeded("x").is_user_facing());
        assert!(AppError::payload_too_large("x").is_user_facing());
        assert!(!AppError::database("x").is_user_facing());
        assert!(!AppError::internal("x").is_user_facing());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "roster.csv");
        let err = AppError::from(io);
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(std::error::Error::source(&err).is_some());
    }
}
