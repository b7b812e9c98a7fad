//! Provisioning subcommand

use crate::{Result, types::ProvisioningInformation};
use clap::Args;

/// Arguments for building a provisioning request
#[derive(Debug, Clone, Default, Args)]
pub struct ProvisioningArgs {
    /// Provisioning credential identifier
    #[arg(long, value_name = "ID", default_value = "")]
    pub credential_id: String,

    /// Sharing instance identifier
    #[arg(long, value_name = "ID", default_value = "")]
    pub sharing_instance_id: String,

    /// Card template identifier
    #[arg(long, value_name = "ID", default_value = "")]
    pub card_template_id: String,

    /// Environment identifier
    #[arg(long, value_name = "ID")]
    pub environment_id: Option<String>,

    /// Account hash
    #[arg(long, value_name = "HASH")]
    pub account_hash: Option<String>,

    /// Relying party identifier
    #[arg(long, value_name = "ID")]
    pub relying_party_id: Option<String>,
}

impl From<&ProvisioningArgs> for ProvisioningInformation {
    fn from(args: &ProvisioningArgs) -> Self {
        let mut info = ProvisioningInformation::new()
            .with_provisioning_credential_identifier(&args.credential_id)
            .with_sharing_instance_identifier(&args.sharing_instance_id)
            .with_card_template_identifier(&args.card_template_id);

        if let Some(ref environment_id) = args.environment_id {
            info = info.with_environment_identifier(environment_id);
        }

        if let Some(ref account_hash) = args.account_hash {
            info = info.with_account_hash(account_hash);
        }

        if let Some(ref relying_party_id) = args.relying_party_id {
            info = info.with_relying_party_identifier(relying_party_id);
        }

        info
    }
}

/// Render the provisioning request as JSON
pub fn render_provisioning(args: &ProvisioningArgs) -> Result<String> {
    Ok(serde_json::to_string(&ProvisioningInformation::from(args))?)
}
