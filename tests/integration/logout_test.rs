//! Integration tests for `/api/logout`.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_logout_success() {
    let app = TestApp::new();
    app.login("9").await;

    app.logout("9")
        .await
        .assert_message(StatusCode::OK, true, "komal kumari logged out successfully.");
    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 0);
}

#[tokio::test]
async fn test_logout_requires_roll_number() {
    let app = TestApp::new();
    app.logout(" ").await.assert_message(
        StatusCode::BAD_REQUEST,
        false,
        "Roll Number is required.",
    );
    app.post_raw("/api/logout", "").await.assert_message(
        StatusCode::BAD_REQUEST,
        false,
        "Roll Number is required.",
    );
}

#[tokio::test]
async fn test_logout_unknown_roll_number() {
    let app = TestApp::new();
    app.logout("99")
        .await
        .assert_message(StatusCode::FORBIDDEN, false, "Roll Number not found.");
}

#[tokio::test]
async fn test_logout_when_not_logged_in() {
    let app = TestApp::new();
    app.login("1").await;

    app.logout("6").await.assert_message(
        StatusCode::BAD_REQUEST,
        false,
        "darshana gurav is not logged in.",
    );
    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 1);
}

#[tokio::test]
async fn test_logout_twice() {
    let app = TestApp::new();
    app.login("7").await;
    app.logout("7").await;

    app.logout("7").await.assert_message(
        StatusCode::BAD_REQUEST,
        false,
        "pranjal patil is not logged in.",
    );
}

#[tokio::test]
async fn test_login_again_after_logout() {
    let app = TestApp::with_capacity(1);

    for _ in 0..3 {
        assert_eq!(app.login("2").await.status, StatusCode::OK);
        assert_eq!(app.logout("2").await.status, StatusCode::OK);
    }
    assert_eq!(app.get("/api/status").await.body["pcs_in_use"], 0);
}
