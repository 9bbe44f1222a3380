use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "inventory.csv";
const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 300;

/// Configuration for shelf, stored next to the inventory blob as
/// `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name CSV exports are written to (e.g., "inventory.csv")
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Seconds between rewrites in `export --watch` mode
    #[serde(default = "default_autosave_interval")]
    pub autosave_interval_secs: u64,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_autosave_interval() -> u64 {
    DEFAULT_AUTOSAVE_INTERVAL_SECS
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            export_file: default_export_file(),
            autosave_interval_secs: default_autosave_interval(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn set_export_file(&mut self, name: &str) {
        self.export_file = name.to_string();
    }

    pub fn set_autosave_interval(&mut self, secs: u64) {
        self.autosave_interval_secs = secs;
    }
}
