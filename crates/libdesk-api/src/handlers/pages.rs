//! Static HTML pages that drive the JSON API from the browser.

use axum::response::Html;

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../assets/home.html"))
}

/// GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../../assets/login.html"))
}

/// GET /status
pub async fn status_page() -> Html<&'static str> {
    Html(include_str!("../../assets/status.html"))
}
