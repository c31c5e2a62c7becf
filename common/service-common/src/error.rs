//! Error handling utilities for HTTP services
//!
//! Provides [`HttpError`] and traits for consistent error handling across
//! handlers. Only the public message ever reaches the client; details of
//! the underlying failure belong in the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::result::text_response;

/// Type alias for handler results
pub type HttpResult<T> = Result<T, HttpError>;

/// HTTP error with status code and client-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Generic 500 with the canonical reason phrase as body
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        text_response(self.status, self.message)
    }
}

/// Trait for converting errors into HTTP errors
///
/// Implement this trait for domain error types to enable the `?` operator
/// in handlers via [`ResultExt::to_http_err`].
///
/// # Example
///
/// ```rust,ignore
/// use service_common::{HttpError, IntoHttpError};
///
/// impl IntoHttpError for MyError {
///     fn into_http_error(self) -> HttpError {
///         tracing::error!("my operation failed: {}", self);
///         HttpError::internal()
///     }
/// }
/// ```
pub trait IntoHttpError {
    /// Convert this error into an HTTP error
    fn into_http_error(self) -> HttpError;
}

impl IntoHttpError for HttpError {
    fn into_http_error(self) -> HttpError {
        self
    }
}

impl IntoHttpError for anyhow::Error {
    fn into_http_error(self) -> HttpError {
        tracing::error!("Request failed: {:#}", self);
        HttpError::internal()
    }
}

/// Extension trait for Result types to convert to HTTP errors
///
/// Provides a convenient `to_http_err()` method for any Result where
/// the error type implements `IntoHttpError`.
///
/// # Example
///
/// ```rust,ignore
/// use service_common::ResultExt;
///
/// async fn my_handler() -> Result<Response, HttpError> {
///     let data = load().await.to_http_err()?;
///     // ...
/// }
/// ```
pub trait ResultExt<T> {
    /// Convert the error to an HTTP error
    fn to_http_err(self) -> Result<T, HttpError>;
}

impl<T, E: IntoHttpError> ResultExt<T> for Result<T, E> {
    fn to_http_err(self) -> Result<T, HttpError> {
        self.map_err(|e| e.into_http_error())
    }
}

/// Log `detail` and return a generic internal error
///
/// The detail goes to the server log only; the client sees the
/// canonical "Internal Server Error" body.
pub fn internal_error(detail: impl std::fmt::Display) -> HttpError {
    tracing::error!("{}", detail);
    HttpError::internal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_hides_detail() {
        let err = internal_error("open /proc/uptime: permission denied");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("permission denied"));
    }

    #[test]
    fn test_result_ext_anyhow() {
        let result: Result<(), anyhow::Error> = Err(anyhow::anyhow!("disk on fire"));
        let err = result.to_http_err().unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal Server Error");
    }

    #[test]
    fn test_result_ext_passthrough() {
        let result: Result<(), HttpError> =
            Err(HttpError::new(StatusCode::SERVICE_UNAVAILABLE, "try later"));
        let err = result.to_http_err().unwrap_err();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.message, "try later");
    }

    #[test]
    fn test_into_response_status() {
        let response = HttpError::internal().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
