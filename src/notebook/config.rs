use crate::error::{NotebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Notebook preferences, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotebookConfig {
    /// Report modify commands that name an unknown note instead of ignoring them
    #[serde(default)]
    pub report_missing_notes: bool,

    /// Include each note's creation date when listing
    #[serde(default)]
    pub show_creation_date: bool,
}

impl NotebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Sets a single option by its command-line style key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let flag = match value {
            "true" | "on" | "yes" => true,
            "false" | "off" | "no" => false,
            _ => {
                return Err(NotebookError::Config(format!(
                    "expected true or false for {}, got {}",
                    key, value
                )))
            }
        };
        match key {
            "report-missing" => self.report_missing_notes = flag,
            "dates" => self.show_creation_date = flag,
            _ => return Err(NotebookError::Config(format!("unknown option: {}", key))),
        }
        Ok(())
    }
}
