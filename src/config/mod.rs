//! Configuration management for the wallet SDK
//!
//! This module handles loading the preference store location, key
//! namespace and logging settings.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{Config, LoggingConfig, StorageConfig, default_store_path};
