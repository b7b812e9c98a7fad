//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
#[allow(dead_code)]
pub mod helpers {
    use alert_wallet_sdk::{Config, SettingsStore};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Path of the preference file inside a test directory
    pub fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("alert-wallet").join("preferences.json")
    }

    /// Create configuration pointing at `path` with the given key prefix
    pub fn create_test_config(path: &Path, key_prefix: &str) -> Config {
        let mut config = Config::default();
        config.storage.path = path.to_path_buf();
        config.storage.key_prefix = key_prefix.to_string();
        config
    }

    /// Open a file-backed settings store at `path`
    pub fn open_store(path: &Path) -> SettingsStore {
        SettingsStore::from_config(&create_test_config(path, "")).unwrap()
    }
}
