//! Command implementations for the `alert-wallet` binary
//!
//! The binary only parses arguments and sets up logging; everything it
//! prints is produced here so it can be tested without spawning a process.

pub mod provisioning;
pub mod settings;

pub use provisioning::{ProvisioningArgs, render_provisioning};
pub use settings::{SettingName, clear_setting, get_setting, render_snapshot, set_setting};
