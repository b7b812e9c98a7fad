//! Typed settings accessor.
//!
//! [`SettingsStore`] is constructed once by the host (usually from
//! [`Config`]) and handed to every component that needs the server URL or
//! the access token. Cloning is cheap and every clone reads and writes the
//! same backend.
//!
//! No accessor reports failure. Reads return `None` for anything absent,
//! clears always report `true`.
//!
//! ## Examples
//!
//! ```rust
//! use alert_wallet_sdk::store::SettingsStore;
//!
//! let settings = SettingsStore::in_memory();
//! settings.set_server_url("https://wallet.example");
//! settings.set_access_token("token-123");
//! settings.set_access_token_expiration(1_900_000_000.0);
//!
//! assert_eq!(settings.server_url().as_deref(), Some("https://wallet.example"));
//!
//! settings.clear_all();
//! assert_eq!(settings.access_token(), None);
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::backend::PreferenceStore;
use super::file::FilePreferences;
use super::keys::{ACCESS_TOKEN, ACCESS_TOKEN_EXPIRATION, SERVER_URL};
use super::memory::MemoryPreferences;
use crate::{Result, config::Config};

/// Persistent settings for the wallet SDK.
#[derive(Clone)]
pub struct SettingsStore {
    backend: Arc<dyn PreferenceStore>,
    server_url_key: String,
    access_token_key: String,
    access_token_expiration_key: String,
}

/// Point-in-time read of every setting.
///
/// Fields are read one after another, so a concurrent writer may leave
/// the snapshot mixing old and new values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub server_url: Option<String>,
    pub access_token: Option<String>,
    pub access_token_expiration: Option<f64>,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("server_url_key", &self.server_url_key)
            .field("access_token_key", &self.access_token_key)
            .field(
                "access_token_expiration_key",
                &self.access_token_expiration_key,
            )
            .finish_non_exhaustive()
    }
}

impl SettingsStore {
    /// Create a store over `backend` using the unprefixed keys.
    pub fn new(backend: Arc<dyn PreferenceStore>) -> Self {
        Self::with_prefix(backend, "")
    }

    /// Create a store over `backend` with every key namespaced by `prefix`.
    pub fn with_prefix(backend: Arc<dyn PreferenceStore>, prefix: &str) -> Self {
        Self {
            backend,
            server_url_key: SERVER_URL.qualified(prefix),
            access_token_key: ACCESS_TOKEN.qualified(prefix),
            access_token_expiration_key: ACCESS_TOKEN_EXPIRATION.qualified(prefix),
        }
    }

    /// Create a store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryPreferences::new()))
    }

    /// Open the file-backed store described by `config`.
    ///
    /// # Errors
    ///
    /// Fails only when the existing preference file cannot be read.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = FilePreferences::open(&config.storage.path)?;
        Ok(Self::with_prefix(
            Arc::new(backend),
            &config.storage.key_prefix,
        ))
    }

    /// Underlying persistence backend.
    pub fn backend(&self) -> &Arc<dyn PreferenceStore> {
        &self.backend
    }

    /// Store the server URL, replacing any previous value.
    pub fn set_server_url(&self, server_url: &str) {
        debug!(key = %self.server_url_key, "Setting server URL");
        self.backend
            .set_value(&self.server_url_key, server_url.into());
    }

    /// Stored server URL, if any.
    pub fn server_url(&self) -> Option<String> {
        self.backend.string(&self.server_url_key)
    }

    /// Remove the server URL. Always returns `true`.
    pub fn clear_server_url(&self) -> bool {
        debug!(key = %self.server_url_key, "Clearing server URL");
        self.backend.remove_object(&self.server_url_key);
        true
    }

    /// Store the access token, replacing any previous value.
    pub fn set_access_token(&self, access_token: &str) {
        debug!(key = %self.access_token_key, "Setting access token");
        self.backend
            .set_value(&self.access_token_key, access_token.into());
    }

    /// Stored access token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.backend.string(&self.access_token_key)
    }

    /// Remove the access token. Always returns `true`.
    pub fn clear_access_token(&self) -> bool {
        debug!(key = %self.access_token_key, "Clearing access token");
        self.backend.remove_object(&self.access_token_key);
        true
    }

    /// Store the expiration timestamp verbatim.
    ///
    /// Zero and negative values are written as given but read back as
    /// `None` by [`access_token_expiration`](Self::access_token_expiration).
    pub fn set_access_token_expiration(&self, expiration: f64) {
        debug!(
            key = %self.access_token_expiration_key,
            "Setting access token expiration"
        );
        self.backend
            .set_value(&self.access_token_expiration_key, expiration.into());
    }

    /// Stored expiration, or `None` unless it is strictly positive.
    ///
    /// The backend reads a missing key as `0.0`, so "never set" and
    /// "set to 0" are indistinguishable here.
    pub fn access_token_expiration(&self) -> Option<f64> {
        let expiration = self.backend.double(&self.access_token_expiration_key);
        (expiration > 0.0).then_some(expiration)
    }

    /// Remove the expiration timestamp. Always returns `true`.
    pub fn clear_access_token_expiration(&self) -> bool {
        debug!(
            key = %self.access_token_expiration_key,
            "Clearing access token expiration"
        );
        self.backend
            .remove_object(&self.access_token_expiration_key);
        true
    }

    /// Clear expiration, access token and server URL, in that order.
    ///
    /// These are three separate backend calls. Keys not managed by this
    /// store are left alone.
    pub fn clear_all(&self) {
        self.clear_access_token_expiration();
        self.clear_access_token();
        self.clear_server_url();
    }

    /// Expiration as a UTC instant, if one is stored and representable.
    pub fn access_token_expires_at(&self) -> Option<DateTime<Utc>> {
        let expiration = self.access_token_expiration()?;
        let secs = expiration.trunc();
        let nanos = ((expiration - secs) * 1e9).round() as u32;
        if secs > i64::MAX as f64 {
            return None;
        }
        DateTime::<Utc>::from_timestamp(secs as i64, nanos.min(999_999_999))
    }

    /// Check whether the stored token has expired at `now`.
    ///
    /// A token without an expiration never reads as expired.
    pub fn is_access_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.access_token_expires_at()
            .is_some_and(|expires_at| now >= expires_at)
    }

    /// Read every setting.
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            server_url: self.server_url(),
            access_token: self.access_token(),
            access_token_expiration: self.access_token_expiration(),
        }
    }
}
