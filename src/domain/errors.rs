//! Domain error types
//!
//! This module defines the error hierarchy for the supplier feed.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main supplier feed error type
///
/// Composition itself never produces an error; every variant here comes from
/// request validation, configuration, or the fetch layer.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Malformed request parameters, raised before any fetch happens
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Identifier or child-table retrieval failed
    #[error("Fetch failure: {0}")]
    FetchFailure(String),

    /// The request was cancelled while a fetch was in flight
    #[error("Request cancelled: {0}")]
    Cancelled(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl FeedError {
    /// Whether the error was raised by request validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FeedError::InvalidArgument(_))
    }

    /// Whether the error originated in the fetch layer
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, FeedError::FetchFailure(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for FeedError {
    fn from(err: toml::de::Error) -> Self {
        FeedError::Configuration(format!("TOML parse error: {err}"))
    }
}
