//! Persistent settings storage
//!
//! This module provides the preference backend seam and the typed
//! [`SettingsStore`] accessor built on it.
//!
//! ## Architecture
//!
//! - [`PreferenceStore`]: flat key-value backend (`set_value`, `string`,
//!   `double`, `remove_object`)
//! - [`MemoryPreferences`]: process-local backend
//! - [`FilePreferences`]: JSON file backend with atomic rewrites
//! - [`keys`]: the declared preference keys
//! - [`SettingsStore`]: server URL, access token and token expiration

pub mod backend;
pub mod file;
pub mod keys;
pub mod memory;
pub mod settings;

pub use backend::{PreferenceStore, PreferenceValue};
pub use file::FilePreferences;
pub use memory::MemoryPreferences;
pub use settings::{SettingsSnapshot, SettingsStore};
