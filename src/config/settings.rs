//! Configuration settings structure
//!
//! Defines where the preference store lives, how its keys are namespaced
//! and how the SDK logs.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name used under the platform configuration directory
pub const APP_DIR_NAME: &str = "alert-wallet";

/// File name of the JSON preference store
pub const STORE_FILE_NAME: &str = "preferences.json";

/// Log levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration for the wallet SDK
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preference storage configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Preference storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON file backing the preference store
    pub path: PathBuf,
    /// Prefix prepended verbatim to every preference key
    pub key_prefix: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            key_prefix: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            verbose: false,
        }
    }
}

/// Default location of the preference file
///
/// Falls back to a relative path when the platform has no configuration directory.
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(STORE_FILE_NAME)
}

impl Config {
    /// Create new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file, filling missing fields with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of this configuration
    pub fn merge_with_env(mut self) -> Result<Self> {
        if let Ok(path) = std::env::var("ALERT_WALLET_STORE_PATH") {
            if path.trim().is_empty() {
                return Err(Error::config("ALERT_WALLET_STORE_PATH is empty"));
            }
            self.storage.path = PathBuf::from(path);
        }

        if let Ok(prefix) = std::env::var("ALERT_WALLET_KEY_PREFIX") {
            self.storage.key_prefix = prefix;
        }

        if let Ok(level) = std::env::var("ALERT_WALLET_LOG_LEVEL") {
            self.logging.level = level.trim().to_lowercase();
        }

        Ok(self)
    }

    /// Check the configuration for values the SDK cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.storage.path.as_os_str().is_empty() {
            return Err(Error::config("storage.path must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::config(format!(
                "Invalid log level '{}', expected one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }

        Ok(())
    }

    /// Effective tracing filter directive
    pub fn log_filter(&self) -> &str {
        if self.logging.verbose {
            "debug"
        } else {
            &self.logging.level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.path.ends_with("alert-wallet/preferences.json"));
        assert_eq!(config.storage.key_prefix, "");
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[storage]
key_prefix = "acme"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.key_prefix, "acme");
        assert_eq!(config.storage.path, default_store_path());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let mut config = Config::default();
        config.storage.path = PathBuf::new();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_log_filter() {
        let mut config = Config::default();
        assert_eq!(config.log_filter(), "warn");
        config.logging.verbose = true;
        assert_eq!(config.log_filter(), "debug");
    }
}
