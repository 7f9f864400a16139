//! Application settings for FinTrack
//!
//! Settings that shape how the ledger is stored and reported. User
//! preferences (currency, theme) travel with the ledger state instead.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::{FintrackError, FintrackResult};
use crate::export::DEFAULT_EXPORT_FILE;
use crate::reports::DEFAULT_NEAR_LIMIT_PERCENT;
use crate::storage::{read_json, write_json_atomic};

/// Default key the ledger is stored under
pub const DEFAULT_STORAGE_KEY: &str = "fintrack-storage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key the ledger state is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File name used when exporting without an explicit path
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Percentage of a budget's limit at which it is flagged as near the limit
    #[serde(default = "default_near_limit_percent")]
    pub near_limit_percent: u8,

    /// Date format for display (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_near_limit_percent() -> u8 {
    DEFAULT_NEAR_LIMIT_PERCENT
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            storage_key: default_storage_key(),
            export_file_name: default_export_file_name(),
            near_limit_percent: default_near_limit_percent(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> FintrackResult<Self> {
        let settings: Settings = read_json(paths.settings_file())
            .map_err(|e| FintrackError::Config(format!("Failed to load settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> FintrackResult<()> {
        self.validate()?;
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    pub fn validate(&self) -> FintrackResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(FintrackError::Config("storage_key must not be empty".into()));
        }
        if self.near_limit_percent == 0 || self.near_limit_percent > 100 {
            return Err(FintrackError::Config(format!(
                "near_limit_percent must be between 1 and 100 (got {})",
                self.near_limit_percent
            )));
        }
        Ok(())
    }
}
