//! Lenient `roll_no` body extractor.
//!
//! Never rejects with Axum's plain-text JSON errors: every problem with the
//! body becomes the `{success:false, message}` shape clients expect. An
//! oversized body keeps its 413 status; anything else unreadable counts as a
//! missing roll number.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use validator::Validate;

use libdesk_core::error::AppError;
use libdesk_core::types::roll_number::ROLL_NUMBER_REQUIRED;

use crate::dto::request::RollNoRequest;
use crate::error::ApiError;

/// Message returned when the body exceeds `server.max_body_bytes`.
pub const BODY_TOO_LARGE: &str = "Request body too large.";

/// A validated, non-blank roll number taken from the request body.
#[derive(Debug, Clone)]
pub struct RollNoBody(pub String);

impl<S> FromRequest<S> for RollNoBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::payload_too_large(BODY_TOO_LARGE)
            } else {
                AppError::validation(ROLL_NUMBER_REQUIRED)
            }
        })?;

        let request = RollNoRequest::from_body(&body);
        request
            .validate()
            .map_err(|_| AppError::validation(ROLL_NUMBER_REQUIRED))?;

        Ok(Self(request.roll_no))
    }
}
