//! User settings for FinTrack
//!
//! Preferences that live outside any single profile: display defaults and the
//! profile to open when none is named on the command line.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;

/// User settings for FinTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol for new profiles
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Profile opened when `--profile` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_profile: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FintrackError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet; the caller decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
