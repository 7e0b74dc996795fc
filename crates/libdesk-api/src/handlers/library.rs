//! PC pool handlers: status, login, logout.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{MessageResponse, StatusResponse};
use crate::error::ApiError;
use crate::extractors::RollNoBody;
use crate::state::AppState;

/// GET /api/status
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let status = state.library.status().await?;
    Ok(Json(status.into()))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    RollNoBody(roll_no): RollNoBody,
) -> Result<Json<MessageResponse>, ApiError> {
    let change = state.library.login(&roll_no).await?;
    Ok(Json(MessageResponse::ok(change.message())))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    RollNoBody(roll_no): RollNoBody,
) -> Result<Json<MessageResponse>, ApiError> {
    let change = state.library.logout(&roll_no).await?;
    Ok(Json(MessageResponse::ok(change.message())))
}
