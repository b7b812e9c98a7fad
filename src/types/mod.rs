//! Type definitions for the wallet SDK
//!
//! This module contains the data structures exchanged with the wallet service.

pub mod provisioning;

pub use provisioning::ProvisioningInformation;
