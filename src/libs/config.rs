//! Configuration management for the ponto application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory. The only configurable module today is the Pontomais API
//! connection; it is optional so the binary still runs (and errors politely)
//! before `ponto init` has been executed. Passwords are never written to the
//! configuration file.

use super::data_storage::DataStorage;
use crate::api::pontomais::PontomaisConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Pontomais time-tracking service connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pontomais: Option<PontomaisConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when none
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, pre-filling current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        config.pontomais = Some(PontomaisConfig::init(&config.pontomais)?);
        Ok(config)
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }
}
