//! Settings subcommands

use crate::{Error, Result, store::SettingsStore};
use clap::ValueEnum;

/// Settings addressable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingName {
    /// Server base URL
    ServerUrl,
    /// Access token
    AccessToken,
    /// Access token expiration, seconds since the Unix epoch
    AccessTokenExpiration,
}

/// Read a setting as display text
pub fn get_setting(settings: &SettingsStore, name: SettingName) -> Option<String> {
    match name {
        SettingName::ServerUrl => settings.server_url(),
        SettingName::AccessToken => settings.access_token(),
        SettingName::AccessTokenExpiration => {
            settings.access_token_expiration().map(|e| e.to_string())
        }
    }
}

/// Write a setting from its command line text
///
/// # Errors
///
/// Returns a configuration error when an expiration is not a number.
pub fn set_setting(settings: &SettingsStore, name: SettingName, value: &str) -> Result<()> {
    match name {
        SettingName::ServerUrl => settings.set_server_url(value),
        SettingName::AccessToken => settings.set_access_token(value),
        SettingName::AccessTokenExpiration => {
            let expiration: f64 = value
                .trim()
                .parse()
                .map_err(|e| Error::config(format!("Invalid expiration '{value}': {e}")))?;
            settings.set_access_token_expiration(expiration);
        }
    }
    Ok(())
}

/// Remove a setting
pub fn clear_setting(settings: &SettingsStore, name: SettingName) -> bool {
    match name {
        SettingName::ServerUrl => settings.clear_server_url(),
        SettingName::AccessToken => settings.clear_access_token(),
        SettingName::AccessTokenExpiration => settings.clear_access_token_expiration(),
    }
}

/// Render every setting as pretty JSON
pub fn render_snapshot(settings: &SettingsStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(&settings.snapshot())?)
}
