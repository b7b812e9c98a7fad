//! Error type definitions
//!
//! Defines the error types used at the fallible edges of the SDK:
//! configuration loading, opening the file-backed preference store and
//! CLI output. Settings accessors themselves never return errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the wallet SDK
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Preference storage errors
    #[error("Storage error at {path:?}: {reason}")]
    Storage { path: PathBuf, reason: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a storage error for the given backing file
    pub fn storage(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Storage {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config("test config error");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: test config error");
    }

    #[test]
    fn test_storage_error() {
        let err = Error::storage("/tmp/prefs.json", "not a JSON object");
        assert!(matches!(err, Error::Storage { .. }));
        assert!(err.to_string().contains("prefs.json"));
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("= broken");
        assert!(toml_err.is_err());

        let err: Error = toml_err.unwrap_err().into();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.to_string().starts_with("TOML error"));
    }
}
