//! Alert Wallet SDK
//!
//! Persistent settings and provisioning request types for wallet hosts.
//!
//! # Architecture
//!
//! - **Settings store**: [`SettingsStore`] keeps the wallet service URL,
//!   the access token and its expiration in a [`store::PreferenceStore`]
//!   backend that survives process restarts.
//! - **Provisioning request**: [`ProvisioningInformation`] carries the
//!   parameters of a card/credential provisioning call, serialized with
//!   the field names the wallet service expects.
//!
//! The host builds one [`SettingsStore`] at startup and passes it (or a
//! clone) to whatever needs settings access.
//!
//! # Examples
//!
//! ```rust
//! use alert_wallet_sdk::{ProvisioningInformation, SettingsStore};
//!
//! let settings = SettingsStore::in_memory();
//! settings.set_server_url("https://wallet.example");
//! assert_eq!(settings.access_token_expiration(), None);
//!
//! let request = ProvisioningInformation::new()
//!     .with_provisioning_credential_identifier("cred-1")
//!     .with_card_template_identifier("employee-badge");
//! let json = serde_json::to_string(&request)?;
//! assert!(json.contains("\"cardTemplateIdentifier\":\"employee-badge\""));
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod types;
pub mod utils;

pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use store::{SettingsSnapshot, SettingsStore};
pub use types::ProvisioningInformation;
