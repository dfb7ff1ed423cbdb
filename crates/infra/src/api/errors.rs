//! API-specific error types
//!
//! Provides error classification for pipeline outcomes.

use std::time::Duration;

use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth) and unreadable responses
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration errors
    Config,
    /// Rejected before dispatch (malformed link, unencodable header)
    Local,
}

/// API operation errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Link was not properly formatted: {0}")]
    MalformedLink(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::Decode(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
            Self::MalformedLink(_) | Self::InvalidRequest(_) | Self::Internal(_) => {
                ApiErrorCategory::Local
            }
        }
    }

    /// The backend could not be reached or failed on its side.
    pub fn is_communication_failure(&self) -> bool {
        matches!(self.category(), ApiErrorCategory::Server | ApiErrorCategory::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Auth("test".to_string()).category(), ApiErrorCategory::Authentication);
        assert_eq!(ApiError::RateLimit("test".to_string()).category(), ApiErrorCategory::RateLimit);
        assert_eq!(ApiError::Server("test".to_string()).category(), ApiErrorCategory::Server);
        assert_eq!(ApiError::Network("test".to_string()).category(), ApiErrorCategory::Network);
        assert_eq!(ApiError::Timeout(Duration::from_secs(1)).category(), ApiErrorCategory::Network);
        assert_eq!(ApiError::Decode("test".to_string()).category(), ApiErrorCategory::Client);
        assert_eq!(ApiError::MalformedLink("test".to_string()).category(), ApiErrorCategory::Local);
    }

    #[test]
    fn test_communication_failures() {
        assert!(ApiError::Server("test".to_string()).is_communication_failure());
        assert!(ApiError::Network("test".to_string()).is_communication_failure());
        assert!(ApiError::Timeout(Duration::from_secs(1)).is_communication_failure());
        assert!(!ApiError::Client("test".to_string()).is_communication_failure());
        assert!(!ApiError::Auth("test".to_string()).is_communication_failure());
        assert!(!ApiError::InvalidRequest("test".to_string()).is_communication_failure());
    }
}
