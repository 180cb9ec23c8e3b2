//! Core error types for folio.
//!
//! Page behaviours never fail loudly: a missing element or capability turns
//! into a skipped feature. The only hard failures are configuration errors,
//! which surface before any listener is attached.

use thiserror::Error;

/// Core error type for folio operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("config parse error: {reason}")]
    ConfigParse { reason: String },

    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl Error {
    /// Create a config parse error.
    pub fn config_parse(reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error for a specific field.
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::config_parse(err.to_string())
    }
}

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
