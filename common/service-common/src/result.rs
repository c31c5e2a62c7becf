//! Response helpers for HTTP handlers
//!
//! Provides convenient functions for building text responses with an
//! explicit content type, reducing boilerplate in handlers.

use std::borrow::Cow;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// Create a plain text response with the given status
pub fn text_response(status: StatusCode, body: impl Into<String>) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body.into()).into_response()
}

/// Create a successful HTML response
///
/// The body is sent as-is; interpolated values must already have gone
/// through [`escape_html`].
pub fn html_success(body: impl Into<String>) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_HTML)], body.into()).into_response()
}

/// Escape HTML metacharacters (`& < > " '`)
///
/// Borrows the input unchanged when there is nothing to escape.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
