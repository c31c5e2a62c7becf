//! Uptime error types

use service_common::{HttpError, IntoHttpError};

/// Failure to obtain an uptime reading
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UptimeError {
    /// The source could not be opened or read
    #[error("uptime source {origin} unavailable: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    /// The source was read but did not hold a usable seconds value
    #[error("uptime source {origin} is malformed: {reason}")]
    MalformedSource { origin: String, reason: String },
}

impl UptimeError {
    pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedSource {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Re-attribute the error to a different source
    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        match self {
            Self::SourceUnavailable { reason, .. } => Self::SourceUnavailable {
                origin: origin.into(),
                reason,
            },
            Self::MalformedSource { reason, .. } => Self::MalformedSource {
                origin: origin.into(),
                reason,
            },
        }
    }
}

/// Result type for uptime reads
pub type UptimeResult<T> = Result<T, UptimeError>;

impl IntoHttpError for UptimeError {
    fn into_http_error(self) -> HttpError {
        service_common::internal_error(format_args!("Failed to read uptime: {}", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_display_includes_origin() {
        let err = UptimeError::unavailable("/proc/uptime", "permission denied");
        assert_eq!(
            err.to_string(),
            "uptime source /proc/uptime unavailable: permission denied"
        );
    }

    #[test]
    fn test_http_error_is_generic() {
        let err = UptimeError::malformed("/proc/uptime", "invalid float literal").into_http_error();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("/proc/uptime"));
        assert!(!err.message.contains("float"));
    }
}
