//! Error handling for the analytics API module

use crate::logging::LogLevel;
use thiserror::Error;

/// A failed fetch cycle.
///
/// `Display` yields only the human-readable reason; the dashboard prefixes it
/// with `Error: ` for the status line.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be parsed as JSON, or lacked a required field.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The server answered successfully but the payload carries an `error` field.
    #[error("{0}")]
    Application(String),
}

impl ApiError {
    /// Text shown in the status region for this failure.
    pub fn status_text(&self) -> String {
        format!("Error: {}", self)
    }

    /// Classify the error for the activity log.
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            // Bad symbol, malformed payloads and explicit application errors
            ApiError::Http { .. } | ApiError::Decode(_) | ApiError::Application(_) => {
                LogLevel::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The status text carries the server message verbatim.
    fn test_status_text_uses_server_message() {
        let err = ApiError::Http {
            status: 400,
            message: "bad symbol".to_string(),
        };
        assert_eq!(err.status_text(), "Error: bad symbol");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_server_errors_are_warnings() {
        let err = ApiError::Http {
            status: 503,
            message: "Fetch failed".to_string(),
        };
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_decode_error_text() {
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = format!("Error: {}", decode);
        assert_eq!(ApiError::from(decode).status_text(), expected);
    }
}
