//! Route definitions for the LibDesk HTTP API.
//!
//! JSON endpoints are mounted under `/api`; the HTML pages live at the root.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(library_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// PC pool endpoints: status, login, logout
fn library_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::library::status))
        .route("/login", post(handlers::library::login))
        .route("/logout", post(handlers::library::logout))
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Browser pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/login", get(handlers::pages::login_page))
        .route("/status", get(handlers::pages::status_page))
}
