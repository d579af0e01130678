use crate::error::{InnkeepError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";

/// Presentation preferences, stored as config.json in the data directory.
/// The record files themselves are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InnkeepConfig {
    /// Currency symbol used when rendering amounts.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Include former tenants in listings by default.
    #[serde(default)]
    pub show_inactive: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for InnkeepConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            show_inactive: false,
        }
    }
}

impl InnkeepConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InnkeepError::Io)?;
        let config: InnkeepConfig =
            serde_json::from_str(&content).map_err(InnkeepError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InnkeepError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(InnkeepError::Serialization)?;
        fs::write(config_path, content).map_err(InnkeepError::Io)?;
        Ok(())
    }
}
