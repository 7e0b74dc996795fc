//! Integration tests for `/api/login`.

use axum::http::StatusCode;
use futures::future::join_all;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.login("8")
        .await
        .assert_message(StatusCode::OK, true, "komal patil logged in successfully.");
}

#[tokio::test]
async fn test_login_trims_roll_number() {
    let app = TestApp::new();
    app.login("  3 ")
        .await
        .assert_message(StatusCode::OK, true, "sujay gawari logged in successfully.");
}

#[tokio::test]
async fn test_login_accepts_numeric_roll_number() {
    let app = TestApp::new();
    app.post_json("/api/login", serde_json::json!({ "roll_no": 4 }))
        .await
        .assert_message(StatusCode::OK, true, "aditya mathpati logged in successfully.");
}

#[tokio::test]
async fn test_login_requires_roll_number() {
    let app = TestApp::new();
    let required = "Roll Number is required.";

    app.login("")
        .await
        .assert_message(StatusCode::BAD_REQUEST, false, required);
    app.login("   ")
        .await
        .assert_message(StatusCode::BAD_REQUEST, false, required);
    app.post_json("/api/login", serde_json::json!({}))
        .await
        .assert_message(StatusCode::BAD_REQUEST, false, required);
    app.post_json("/api/login", serde_json::json!({ "roll_no": null }))
        .await
        .assert_message(StatusCode::BAD_REQUEST, false, required);
    app.post_raw("/api/login", "")
        .await
        .assert_message(StatusCode::BAD_REQUEST, false, required);
    app.post_raw("/api/login", "roll_no=1")
        .await
        .assert_message(StatusCode::BAD_REQUEST, false, required);

    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 0);
}

#[tokio::test]
async fn test_login_unknown_roll_number() {
    let app = TestApp::new();
    app.login("99").await.assert_message(
        StatusCode::FORBIDDEN,
        false,
        "Roll Number not found. Access denied.",
    );
    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 0);
}

#[tokio::test]
async fn test_login_twice() {
    let app = TestApp::new();
    app.login("2").await;
    app.login("2").await.assert_message(
        StatusCode::BAD_REQUEST,
        false,
        "mayank disale is already logged in.",
    );
    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 1);
}

#[tokio::test]
async fn test_capacity_scenario() {
    let app = TestApp::with_capacity(2);

    assert_eq!(app.login("1").await.status, StatusCode::OK);
    assert_eq!(app.login("2").await.status, StatusCode::OK);
    app.login("3")
        .await
        .assert_message(StatusCode::BAD_REQUEST, false, "No PCs available.");

    // An active student still hears about the duplicate on a full pool.
    app.login("1").await.assert_message(
        StatusCode::BAD_REQUEST,
        false,
        "prachi bhilare is already logged in.",
    );

    // Unknown students are rejected regardless of occupancy.
    assert_eq!(app.login("99").await.status, StatusCode::FORBIDDEN);

    assert_eq!(app.logout("1").await.status, StatusCode::OK);
    app.login("3")
        .await
        .assert_message(StatusCode::OK, true, "sujay gawari logged in successfully.");

    assert_eq!(
        app.get("/api/status").await.body,
        serde_json::json!({ "total_pcs": 2, "pcs_in_use": 2, "pcs_available": 0 })
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_never_exceed_capacity() {
    let app = TestApp::with_capacity(4);

    let responses = join_all((1..=9).map(|n| {
        let app = &app;
        async move { app.login(&n.to_string()).await }
    }))
    .await;

    let admitted = responses
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .count();
    let rejected = responses
        .iter()
        .filter(|r| r.body["message"] == "No PCs available.")
        .count();

    assert_eq!(admitted, 4);
    assert_eq!(rejected, 5);
    assert_eq!(
        app.get("/api/status").await.body,
        serde_json::json!({ "total_pcs": 4, "pcs_in_use": 4, "pcs_available": 0 })
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_login_admits_once() {
    let app = TestApp::new();

    let responses = join_all((0..10).map(|_| app.login("5"))).await;

    let admitted = responses
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .count();
    assert_eq!(admitted, 1);
    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 1);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = TestApp::new();
    let padding = "x".repeat(20 * 1024);

    app.post_json(
        "/api/login",
        serde_json::json!({ "roll_no": "1", "padding": padding }),
    )
    .await
    .assert_message(
        StatusCode::PAYLOAD_TOO_LARGE,
        false,
        "Request body too large.",
    );

    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 0);
    assert_eq!(app.login("1").await.status, StatusCode::OK);
}
