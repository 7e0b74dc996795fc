//! Request logging middleware.
//!
//! Login and logout lines carry the pool counts after the request, so the
//! log alone shows how the library fills up over the day.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

use crate::state::AppState;

/// Logs method, path, status and duration, plus pool occupancy for
/// requests that change it.
pub async fn request_logging(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(%method, %path, status, duration_ms, "HTTP request failed");
    } else if changes_occupancy(&path) {
        match state.library.status().await {
            Ok(pool) => info!(
                %method,
                %path,
                status,
                duration_ms,
                pcs_in_use = pool.in_use,
                pcs_available = pool.available,
                "HTTP request"
            ),
            Err(_) => info!(%method, %path, status, duration_ms, "HTTP request"),
        }
    } else {
        info!(%method, %path, status, duration_ms, "HTTP request");
    }

    response
}

fn changes_occupancy(path: &str) -> bool {
    matches!(path, "/api/login" | "/api/logout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_occupancy() {
        assert!(changes_occupancy("/api/login"));
        assert!(changes_occupancy("/api/logout"));
        assert!(!changes_occupancy("/api/status"));
        assert!(!changes_occupancy("/login"));
    }
}
