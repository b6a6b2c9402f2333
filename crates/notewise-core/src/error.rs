//! Error types for notewise.

use thiserror::Error;

/// Result type alias using notewise's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notewise operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote endpoint answered with a non-success status that is not a warm-up signal
    #[error("{endpoint} API error: {status} {reason}")]
    UpstreamStatus {
        endpoint: String,
        status: u16,
        reason: String,
    },

    /// Model kept signalling warm-up until the attempt budget ran out
    #[error("Model unavailable after maximum retries ({attempts} attempts)")]
    ModelWarmupExhausted { attempts: u32 },

    /// Any other failure during an analysis run
    #[error("Analysis failed: {0}")]
    Analysis(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error belongs to the analysis taxonomy that is surfaced
    /// to callers as-is (everything else gets wrapped into [`Error::Analysis`]).
    pub fn is_analysis_terminal(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::UpstreamStatus { .. }
                | Error::ModelWarmupExhausted { .. }
                | Error::Analysis(_)
        )
    }

    /// Fold an arbitrary failure into the analysis taxonomy, keeping the
    /// original message.
    pub fn into_analysis(self) -> Self {
        if self.is_analysis_terminal() {
            self
        } else {
            Error::Analysis(self.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("Hugging Face API token is not configured".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Hugging Face API token is not configured"
        );
    }

    #[test]
    fn test_error_display_upstream_status() {
        let err = Error::UpstreamStatus {
            endpoint: "Summary".to_string(),
            status: 401,
            reason: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Summary API error: 401 Unauthorized");
    }

    #[test]
    fn test_error_display_warmup_exhausted() {
        let err = Error::ModelWarmupExhausted { attempts: 3 };
        assert_eq!(
            err.to_string(),
            "Model unavailable after maximum retries (3 attempts)"
        );
    }

    #[test]
    fn test_error_display_analysis() {
        let err = Error::Analysis("connection reset".to_string());
        assert_eq!(err.to_string(), "Analysis failed: connection reset");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("content is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: content is empty");
    }

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.to_string().contains("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_into_analysis_wraps_ambient_errors() {
        let err = Error::Request("connection refused".to_string()).into_analysis();
        match err {
            Error::Analysis(msg) => assert_eq!(msg, "Request error: connection refused"),
            other => panic!("Expected Analysis error, got {:?}", other),
        }

        let err = Error::Serialization("expected value".to_string()).into_analysis();
        assert!(matches!(err, Error::Analysis(_)));
    }

    #[test]
    fn test_into_analysis_keeps_taxonomy_errors() {
        assert!(matches!(
            Error::Config("x".to_string()).into_analysis(),
            Error::Config(_)
        ));
        assert!(matches!(
            Error::ModelWarmupExhausted { attempts: 3 }.into_analysis(),
            Error::ModelWarmupExhausted { attempts: 3 }
        ));
        assert!(matches!(
            Error::UpstreamStatus {
                endpoint: "Classification".to_string(),
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
            .into_analysis(),
            Error::UpstreamStatus { status: 500, .. }
        ));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
