//! Provisioning request type definitions
//!
//! Defines the parameters a host passes to the wallet service when it
//! provisions a card or credential into a wallet.

use serde::{Deserialize, Serialize};

/// Parameters of a card/credential provisioning request
///
/// Field names on the wire are the camelCase names the wallet service
/// expects. Optional fields are omitted when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningInformation {
    /// Identifier of the credential being provisioned
    pub provisioning_credential_identifier: String,

    /// Identifier of the sharing instance
    pub sharing_instance_identifier: String,

    /// Identifier of the card template
    pub card_template_identifier: String,

    /// Target environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_identifier: Option<String>,

    /// Hash of the account the card belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_hash: Option<String>,

    /// Relying party the credential is issued for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relying_party_identifier: Option<String>,
}

impl ProvisioningInformation {
    /// Create a new record with empty identifiers and no optional fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Set provisioning credential identifier
    pub fn with_provisioning_credential_identifier(mut self, id: impl Into<String>) -> Self {
        self.provisioning_credential_identifier = id.into();
        self
    }

    /// Set sharing instance identifier
    pub fn with_sharing_instance_identifier(mut self, id: impl Into<String>) -> Self {
        self.sharing_instance_identifier = id.into();
        self
    }

    /// Set card template identifier
    pub fn with_card_template_identifier(mut self, id: impl Into<String>) -> Self {
        self.card_template_identifier = id.into();
        self
    }

    /// Set environment identifier
    pub fn with_environment_identifier(mut self, id: impl Into<String>) -> Self {
        self.environment_identifier = Some(id.into());
        self
    }

    /// Set account hash
    pub fn with_account_hash(mut self, hash: impl Into<String>) -> Self {
        self.account_hash = Some(hash.into());
        self
    }

    /// Set relying party identifier
    pub fn with_relying_party_identifier(mut self, id: impl Into<String>) -> Self {
        self.relying_party_identifier = Some(id.into());
        self
    }
}
