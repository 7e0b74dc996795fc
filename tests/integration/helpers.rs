//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use libdesk_api::{AppState, build_router};
use libdesk_core::config::AppConfig;
use libdesk_occupancy::StaticDirectory;

/// Students known to every test app.
pub const ROSTER: [(&str, &str); 9] = [
    ("1", "prachi bhilare"),
    ("2", "mayank disale"),
    ("3", "sujay gawari"),
    ("4", "aditya mathpati"),
    ("5", "yogita khose"),
    ("6", "darshana gurav"),
    ("7", "pranjal patil"),
    ("8", "komal patil"),
    ("9", "komal kumari"),
];

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application with the default pool of 25 PCs
    pub fn new() -> Self {
        Self::with_capacity(25)
    }

    /// Create a test application with `total_pcs` PCs
    pub fn with_capacity(total_pcs: u32) -> Self {
        let mut config = AppConfig::default();
        config.occupancy.total_pcs = total_pcs;

        let directory = Arc::new(StaticDirectory::new(ROSTER));
        let router = build_router(AppState::new(config, directory));

        Self { router }
    }

    /// POST a JSON body to `path`
    pub async fn post_json(&self, path: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("Failed to build request"),
        )
        .await
    }

    /// POST a raw body to `path` without a content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .body(Body::from(body))
                .expect("Failed to build request"),
        )
        .await
    }

    /// Log a student in, returning the response
    pub async fn login(&self, roll_no: &str) -> TestResponse {
        self.post_json("/api/login", serde_json::json!({ "roll_no": roll_no }))
            .await
    }

    /// Log a student out, returning the response
    pub async fn logout(&self, roll_no: &str) -> TestResponse {
        self.post_json("/api/logout", serde_json::json!({ "roll_no": roll_no }))
            .await
    }

    /// GET `path`
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(path)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
    }

    /// Send a request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header, empty if absent
    pub content_type: String,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body, `Null` if not JSON
    pub body: Value,
}

impl TestResponse {
    /// Assert a `{success, message}` response.
    pub fn assert_message(&self, status: StatusCode, success: bool, message: &str) {
        assert_eq!(self.status, status, "unexpected status, body: {}", self.text);
        assert_eq!(
            self.body,
            serde_json::json!({ "success": success, "message": message })
        );
    }
}
