//! Path management for FinTrack
//!
//! Resolves where configuration, profile data and the audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories` (Linux:
//!    `~/.config/fintrack`, macOS: `~/Library/Application Support/fintrack`,
//!    Windows: `%APPDATA%\fintrack`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FintrackError;

/// Manages all paths used by FinTrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    /// Base directory for all FinTrack data
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Create a new FintrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FintrackError> {
        let base_dir = if let Ok(custom) = std::env::var("FINTRACK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "fintrack")
                .ok_or_else(|| {
                    FintrackError::Config("Could not determine a home directory".into())
                })?
                .config_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create FintrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the profile data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to a profile's account file
    pub fn profile_file(&self, profile: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", profile))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FintrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FintrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_profile_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.profile_file("kaylee"),
            temp_dir.path().join("data").join("kaylee.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("fintrack");
        let paths = FintrackPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
        assert!(base.join("data").exists());
    }
}
