//! End-to-end tests against a seeded SQLite directory.

use axum::http::StatusCode;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use libdesk_api::{AppState, build_router};
use libdesk_core::config::AppConfig;
use libdesk_database::DatabasePool;
use libdesk_database::repositories::StudentRepository;

use crate::helpers::TestApp;

async fn sqlite_app(cache_enabled: bool) -> (TestApp, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    libdesk_database::migration::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    StudentRepository::new(pool.clone())
        .insert_ignore_many(&libdesk_database::seed::default_roster())
        .await
        .expect("Failed to seed");

    let mut config = AppConfig::default();
    config.occupancy.total_pcs = 2;
    config.directory.cache_enabled = cache_enabled;

    let directory = libdesk_api::app::build_directory(&config, pool.clone());
    let state = AppState::new(config, directory).with_database(DatabasePool::from(pool.clone()));
    let app = TestApp {
        router: build_router(state),
    };
    (app, pool)
}

#[tokio::test]
async fn test_seeded_directory_round_trip() {
    for cache_enabled in [false, true] {
        let (app, _pool) = sqlite_app(cache_enabled).await;

        app.login("1").await.assert_message(
            StatusCode::OK,
            true,
            "prachi bhilare logged in successfully.",
        );
        app.login("1").await.assert_message(
            StatusCode::BAD_REQUEST,
            false,
            "prachi bhilare is already logged in.",
        );
        app.login("99").await.assert_message(
            StatusCode::FORBIDDEN,
            false,
            "Roll Number not found. Access denied.",
        );
        app.logout("1").await.assert_message(
            StatusCode::OK,
            true,
            "prachi bhilare logged out successfully.",
        );
    }
}

#[tokio::test]
async fn test_health_reports_database() {
    let (app, pool) = sqlite_app(false).await;

    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "ok");

    pool.close().await;

    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["database"], "unavailable");
}
