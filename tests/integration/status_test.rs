//! Integration tests for `/api/status` and `/api/health`.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_status_initially_empty() {
    let app = TestApp::new();
    let response = app.get("/api/status").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({ "total_pcs": 25, "pcs_in_use": 0, "pcs_available": 25 })
    );
}

#[tokio::test]
async fn test_status_tracks_logins() {
    let app = TestApp::with_capacity(5);
    app.login("1").await;
    app.login("2").await;
    app.logout("1").await;

    let response = app.get("/api/status").await;
    assert_eq!(
        response.body,
        serde_json::json!({ "total_pcs": 5, "pcs_in_use": 1, "pcs_available": 4 })
    );
}

#[tokio::test]
async fn test_apps_do_not_share_occupancy() {
    let first = TestApp::with_capacity(3);
    let second = TestApp::with_capacity(3);

    first.login("1").await;

    assert_eq!(first.get("/api/status").await.body["pcs_in_use"], 1);
    assert_eq!(second.get("/api/status").await.body["pcs_in_use"], 0);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(response.body["uptime_seconds"].is_u64());
    assert!(response.body.get("database").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();
    let response = app.get("/api/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
