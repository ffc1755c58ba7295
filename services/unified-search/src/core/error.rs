//! Error types and error handling for the unified search service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status
//! codes and response bodies) lives in the adapter modules.

use thiserror::Error;

/// Result type alias for unified search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for the unified search service
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error was caused by the client's request body
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidRequest(_) | SearchError::MissingField(_) | SearchError::SerdeError(_)
        )
    }

    /// Check if this error came from loading or validating configuration
    pub fn is_config(&self) -> bool {
        matches!(self, SearchError::ConfigError(_) | SearchError::TomlError(_))
    }
}
