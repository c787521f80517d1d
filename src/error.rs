//! Error types for mastodon-homefeed.

use thiserror::Error;

/// Common error type for mastodon-homefeed.
#[derive(Error, Debug)]
pub enum HomefeedError {
    /// Transport-level HTTP failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the app registration or token endpoint.
    #[error("instance returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error text reported by the instance, or the status reason.
        message: String,
    },

    /// Non-success response from the home timeline endpoint.
    ///
    /// This is the one failure reported to the user on stdout.
    #[error("Error received from instance: {0}")]
    Instance(String),

    /// Response body that is not the expected JSON shape.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Status timestamp that is not RFC 3339.
    #[error("invalid timestamp {0:?}")]
    Timestamp(String),

    /// Atom serialization error.
    #[error("feed error: {0}")]
    Feed(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for mastodon-homefeed operations.
pub type Result<T> = std::result::Result<T, HomefeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_error_display() {
        let err = HomefeedError::Instance("invalid_token".to_string());
        assert_eq!(
            err.to_string(),
            "Error received from instance: invalid_token"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = HomefeedError::Api {
            status: 422,
            message: "Validation failed".to_string(),
        };
        assert_eq!(err.to_string(), "instance returned 422: Validation failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HomefeedError = io_err.into();
        assert!(matches!(err, HomefeedError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HomefeedError = json_err.into();
        assert!(matches!(err, HomefeedError::Json(_)));
        assert!(err.to_string().starts_with("malformed response"));
    }

    #[test]
    fn test_timestamp_error_display() {
        let err = HomefeedError::Timestamp("yesterday".to_string());
        assert_eq!(err.to_string(), "invalid timestamp \"yesterday\"");
    }
}
