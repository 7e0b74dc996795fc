//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use libdesk_core::error::{AppError, ErrorKind};

use crate::dto::response::MessageResponse;

/// Message returned for every failure that is not the student's doing.
pub const GENERIC_FAILURE: &str = "An unexpected error occurred.";

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation
            | ErrorKind::AlreadyActive
            | ErrorKind::NotActive
            | ErrorKind::CapacityExceeded => StatusCode::BAD_REQUEST,
            ErrorKind::UnknownIdentifier => StatusCode::FORBIDDEN,
            ErrorKind::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.0.is_user_facing() {
            self.0.message
        } else {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal server error");
            GENERIC_FAILURE.to_string()
        };

        (status, Json(MessageResponse::failure(message))).into_response()
    }
}
