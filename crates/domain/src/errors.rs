//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Shopfront
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShopfrontError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Link was not properly formatted: {0}")]
    MalformedLink(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Shopfront operations
pub type Result<T> = std::result::Result<T, ShopfrontError>;
