//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Answers 503 with status `"degraded"` when the directory database is
/// attached but unreachable.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    let database_ok = match &state.db {
        Some(db) => Some(match db.health_check().await {
            Ok(ok) => ok,
            Err(e) => {
                warn!(error = %e, "Directory database health check failed");
                false
            }
        }),
        None => None,
    };

    let healthy = database_ok.unwrap_or(true);
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: state.started_at,
            uptime_seconds: uptime,
            database: database_ok.map(|ok| if ok { "ok" } else { "unavailable" }.to_string()),
        }),
    )
}
