//! Service Common - Shared utilities for HTTP services
//!
//! This crate provides common functionality used across the HTTP services:
//!
//! - **Initialization**: [`init_tracing`] and [`shutdown_signal`] for standardized startup and shutdown
//! - **Responses**: Helper functions for building plain-text and HTML responses
//! - **Errors**: [`HttpError`] plus traits for converting domain errors into it
//!
//! # Example
//!
//! ```rust,ignore
//! use service_common::{html_success, HttpError, ResultExt};
//! use axum::response::Response;
//!
//! async fn my_handler() -> Result<Response, HttpError> {
//!     let value = read_something().await.to_http_err()?;
//!     Ok(html_success(format!("Value is {}", value)))
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{internal_error, HttpError, HttpResult, IntoHttpError, ResultExt};
pub use init::{init_tracing, shutdown_signal};
pub use result::{escape_html, html_success, text_response, TEXT_HTML, TEXT_PLAIN};
