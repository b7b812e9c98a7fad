//! Command line front end for the wallet SDK settings store
//!
//! # Usage
//!
//! ```bash
//! alert-wallet set server-url https://wallet.example
//! alert-wallet get server-url
//! alert-wallet show
//! alert-wallet clear-all
//! alert-wallet provisioning --credential-id cred --sharing-instance-id share --card-template-id tpl
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alert_wallet_sdk::{
    ConfigLoader, SettingsStore,
    cli::{self as commands, ProvisioningArgs, SettingName},
    utils::VERSION,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "alert-wallet")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Preference store file, overrides the configured path
    #[arg(long, value_name = "FILE", global = true)]
    store: Option<PathBuf>,

    /// Key namespace prefix, overrides the configured prefix
    #[arg(long, value_name = "PREFIX", global = true)]
    key_prefix: Option<String>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a setting, or nothing when it is absent
    Get {
        #[arg(value_enum)]
        setting: SettingName,
    },
    /// Store a setting
    Set {
        #[arg(value_enum)]
        setting: SettingName,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Remove a setting
    Clear {
        #[arg(value_enum)]
        setting: SettingName,
    },
    /// Remove every setting
    ClearAll,
    /// Print every setting as JSON
    Show,
    /// Print a provisioning request as JSON
    Provisioning(ProvisioningArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::new().load(cli.config.as_deref())?;
    if let Some(ref store) = cli.store {
        config.storage.path = store.clone();
    }
    if let Some(ref prefix) = cli.key_prefix {
        config.storage.key_prefix = prefix.clone();
    }
    if cli.verbose {
        config.logging.verbose = true;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("alert-wallet v{} using {:?}", VERSION, config.storage.path);

    // Provisioning output never touches the preference store
    let open_settings = || SettingsStore::from_config(&config);

    match cli.command {
        Command::Provisioning(args) => println!("{}", commands::render_provisioning(&args)?),
        Command::Get { setting } => {
            if let Some(value) = commands::get_setting(&open_settings()?, setting) {
                println!("{}", value);
            }
        }
        Command::Set { setting, value } => commands::set_setting(&open_settings()?, setting, &value)?,
        Command::Clear { setting } => {
            commands::clear_setting(&open_settings()?, setting);
        }
        Command::ClearAll => open_settings()?.clear_all(),
        Command::Show => println!("{}", commands::render_snapshot(&open_settings()?)?),
    }

    Ok(())
}
