//! Type-safe keys for the preference store.

use std::marker::PhantomData;

/// Type-safe key for preference storage.
///
/// Associates a key suffix with the value type stored under it, so an
/// accessor cannot read a number slot as text by accident.
///
/// # Example
/// ```rust
/// use alert_wallet_sdk::store::keys::Key;
///
/// const THEME: Key<String> = Key::new("-theme");
/// assert_eq!(THEME.name(), "-theme");
/// assert_eq!(THEME.qualified("acme"), "acme-theme");
/// ```
#[derive(Debug)]
pub struct Key<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> Key<T> {
    /// Create a new type-safe key with the given storage suffix.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The suffix stored when no namespace prefix is configured.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Full storage key under the given namespace prefix.
    pub fn qualified(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.name)
    }
}

/// Server base URL.
pub const SERVER_URL: Key<String> = Key::new("-serverUrl");

/// Bearer token for the wallet service.
pub const ACCESS_TOKEN: Key<String> = Key::new("-auth-token");

/// Access token expiration, seconds since the Unix epoch.
pub const ACCESS_TOKEN_EXPIRATION: Key<f64> = Key::new("-auth-token-expiration");

// Declared slots with no accessors on `SettingsStore` yet.

/// Server port. Reserved, no accessor.
pub const SERVER_PORT: Key<String> = Key::new("-serverPort");

/// Credential type of the provisioned pass. Reserved, no accessor.
pub const CREDENTIAL_TYPE: Key<String> = Key::new("-credential-type");

/// Card template identifier. Reserved, no accessor.
pub const CARD_TEMPLATE_IDENTIFIER: Key<String> = Key::new("-cardTemplate-identifier");

/// Pass photo. Reserved, no accessor. Note the missing leading dash.
pub const PASS_PHOTO: Key<String> = Key::new("pass-photo");

/// Every key suffix the SDK declares, functional or reserved.
pub const DECLARED: [&str; 7] = [
    SERVER_URL.name(),
    SERVER_PORT.name(),
    ACCESS_TOKEN.name(),
    ACCESS_TOKEN_EXPIRATION.name(),
    CREDENTIAL_TYPE.name(),
    CARD_TEMPLATE_IDENTIFIER.name(),
    PASS_PHOTO.name(),
];
