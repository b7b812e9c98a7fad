//! Configuration loading
//!
//! Layers the TOML file and `ALERT_WALLET_*` environment variables over the
//! built-in defaults. Command line flags are applied afterwards by the caller.

use crate::{Result, config::Config};
use std::path::Path;
use tracing::{debug, info, warn};

/// Builds a validated [`Config`] from defaults, file and environment
#[derive(Debug)]
pub struct ConfigLoader {
    defaults: Config,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            defaults: Config::default(),
        }
    }

    /// Load the configuration, later sources overriding earlier ones:
    /// defaults, then `config_file` when it exists, then the environment.
    ///
    /// A missing file is not an error; an unparsable one is.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Config> {
        let base = match config_file {
            Some(path) if path.exists() => {
                info!("Reading configuration from {:?}", path);
                Config::from_file(path)?
            }
            Some(path) => {
                warn!("No configuration file at {:?}, continuing with defaults", path);
                self.defaults.clone()
            }
            None => self.defaults.clone(),
        };

        let config = base.merge_with_env()?;
        config.validate()?;
        debug!(?config, "Configuration resolved");
        Ok(config)
    }

    /// Configuration used when no file or environment override applies
    pub fn defaults(&self) -> &Config {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
