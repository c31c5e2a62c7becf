//! Route handlers

use axum::{extract::State, response::Response};
use service_common::{escape_html, html_success, HttpResult, ResultExt};

use super::AppState;

pub const INDEX_BODY: &str = "Navigate to /uptime for the system's uptime";

/// `GET /`
///
/// Never touches the uptime source.
pub async fn index() -> Response {
    html_success(INDEX_BODY)
}

/// `GET /uptime`
///
/// 200 with `The System Uptime is H:MM:SS[.ffffff]`, or a generic 500 if
/// the source cannot be read. The failure detail is only logged.
pub async fn uptime(State(state): State<AppState>) -> HttpResult<Response> {
    let uptime = state.source.read().await.to_http_err()?;
    tracing::debug!(source = state.source.name(), %uptime, "Read uptime");

    let rendered = uptime.to_string();
    Ok(html_success(format!(
        "The System Uptime is {}",
        escape_html(&rendered)
    )))
}
