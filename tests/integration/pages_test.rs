//! Integration tests for the HTML pages.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_pages_are_html() {
    let app = TestApp::new();

    for path in ["/", "/login", "/status"] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(
            response.content_type.starts_with("text/html"),
            "{path}: {}",
            response.content_type
        );
        assert!(response.text.contains("<html"), "{path}");
    }
}

#[tokio::test]
async fn test_pages_use_the_api() {
    let app = TestApp::new();

    let login = app.get("/login").await;
    assert!(login.text.contains("/api/login"));
    assert!(login.text.contains("/api/logout"));

    let status = app.get("/status").await;
    assert!(status.text.contains("/api/status"));
}
