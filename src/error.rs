//! Error types for toolcat
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Message used when an underlying failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// All error types that can occur in toolcat
#[derive(Debug, Error)]
pub enum ToolcatError {
    /// Transport-level failure talking to the tools endpoint
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Failed to fetch AI tools data (HTTP {0})")]
    Status(u16),

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint URL: {0}")]
    Url(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Opening a tool URL failed
    #[error("Failed to open {url}: {reason}")]
    Launch { url: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything else, carried as its own message
    #[error("{0}")]
    Other(String),
}

impl ToolcatError {
    /// Human-readable message for display, falling back to a generic text
    /// when the underlying error renders empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Result type alias for toolcat operations
pub type Result<T> = std::result::Result<T, ToolcatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = ToolcatError::Status(500);
        assert_eq!(err.to_string(), "Failed to fetch AI tools data (HTTP 500)");
    }

    #[test]
    fn test_launch_error() {
        let err = ToolcatError::Launch {
            url: "https://example.com".to_string(),
            reason: "no opener".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to open https://example.com: no opener");
    }

    #[test]
    fn test_config_error() {
        let err = ToolcatError::Config("bad yaml".to_string());
        assert_eq!(err.to_string(), "Config error: bad yaml");
    }

    #[test]
    fn test_user_message_prefers_underlying_text() {
        let err = ToolcatError::Status(404);
        assert_eq!(err.user_message(), "Failed to fetch AI tools data (HTTP 404)");
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        let err = ToolcatError::Other(String::new());
        assert_eq!(err.user_message(), UNKNOWN_ERROR);

        let err = ToolcatError::Other("   ".to_string());
        assert_eq!(err.user_message(), UNKNOWN_ERROR);

        let err = ToolcatError::Other("task panicked".to_string());
        assert_eq!(err.user_message(), "task panicked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ToolcatError = io_err.into();
        assert!(matches!(err, ToolcatError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ToolcatError = json_err.into();
        assert!(matches!(err, ToolcatError::Json(_)));
        assert!(!err.user_message().is_empty());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ToolcatError::Status(503))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
