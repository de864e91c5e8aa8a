//! Profile store
//!
//! One JSON file per profile under the data directory, each holding the full
//! account aggregate. The store round-trips the aggregate losslessly and
//! writes atomically; it knows nothing about ledger semantics.

use std::path::PathBuf;

use crate::config::paths::FintrackPaths;
use crate::error::{FintrackError, FintrackResult};
use crate::models::AccountBook;

use super::file_io::{read_json_required, write_json_atomic};

/// Persists account aggregates keyed by profile name
pub struct ProfileStore {
    paths: FintrackPaths,
}

impl ProfileStore {
    /// Create a store over the given paths, ensuring directories exist
    pub fn new(paths: FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Validate a profile name for use as a file name
    ///
    /// Restricting to alphanumerics, dashes and underscores keeps the name
    /// safe as a file stem on every platform.
    pub fn validate_name(name: &str) -> FintrackResult<()> {
        if name.is_empty() {
            return Err(FintrackError::Validation(
                "Profile name cannot be empty".into(),
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(FintrackError::Validation(format!(
                "Profile name '{}' may only contain letters, digits, '-' and '_'",
                name
            )));
        }

        Ok(())
    }

    /// Whether a profile exists on disk
    pub fn exists(&self, name: &str) -> bool {
        self.paths.profile_file(name).exists()
    }

    /// Load a profile's aggregate
    pub fn load(&self, name: &str) -> FintrackResult<AccountBook> {
        Self::validate_name(name)?;

        if !self.exists(name) {
            return Err(FintrackError::profile_not_found(name.to_string()));
        }

        read_json_required(self.paths.profile_file(name))
    }

    /// Load a profile's aggregate, creating a fresh one if it doesn't exist
    ///
    /// Mirrors logging in by username: first use creates the account.
    pub fn load_or_create(&self, name: &str) -> FintrackResult<AccountBook> {
        Self::validate_name(name)?;

        if self.exists(name) {
            self.load(name)
        } else {
            let book = AccountBook::new();
            self.save(name, &book)?;
            Ok(book)
        }
    }

    /// Save a profile's aggregate atomically
    pub fn save(&self, name: &str, book: &AccountBook) -> FintrackResult<()> {
        Self::validate_name(name)?;
        write_json_atomic(self.paths.profile_file(name), book)
    }

    /// Delete a profile's data file
    pub fn delete(&self, name: &str) -> FintrackResult<()> {
        Self::validate_name(name)?;

        let path = self.paths.profile_file(name);
        if !path.exists() {
            return Err(FintrackError::profile_not_found(name.to_string()));
        }

        std::fs::remove_file(&path)
            .map_err(|e| FintrackError::Storage(format!("Failed to delete profile: {}", e)))
    }

    /// List profile names found on disk, sorted
    pub fn list(&self) -> FintrackResult<Vec<String>> {
        let data_dir = self.paths.data_dir();
        if !data_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let entries = std::fs::read_dir(&data_dir)
            .map_err(|e| FintrackError::Storage(format!("Failed to read data dir: {}", e)))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| FintrackError::Storage(format!("Failed to read entry: {}", e)))?;
            let path: PathBuf = entry.path();

            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ProfileStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = ProfileStore::new(paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_load_or_create_seeds_fresh_book() {
        let (_temp_dir, store) = create_test_store();

        let book = store.load_or_create("kaylee").unwrap();
        assert!(book.total_balance.is_zero());
        assert_eq!(book.categories.len(), 7);
        assert!(store.exists("kaylee"));
    }

    #[test]
    fn test_save_and_reload_round_trips() {
        let (_temp_dir, store) = create_test_store();

        let mut book = store.load_or_create("kaylee").unwrap();
        book.total_balance = Money::from_cents(123456);
        book.savings = Money::from_cents(50000);
        store.save("kaylee", &book).unwrap();

        let reloaded = store.load("kaylee").unwrap();
        assert_eq!(reloaded.total_balance.cents(), 123456);
        assert_eq!(reloaded.savings.cents(), 50000);
    }

    #[test]
    fn test_load_missing_profile_fails() {
        let (_temp_dir, store) = create_test_store();
        let err = store.load("ghost").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_profile_names_rejected() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load_or_create("").is_err());
        assert!(store.load_or_create("../evil").is_err());
        assert!(store.load_or_create("name with spaces").is_err());
        assert!(store.load_or_create("kaylee_2-dev").is_ok());
    }

    #[test]
    fn test_list_profiles() {
        let (_temp_dir, store) = create_test_store();
        store.load_or_create("beta").unwrap();
        store.load_or_create("alpha").unwrap();

        assert_eq!(store.list().unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_delete_profile() {
        let (_temp_dir, store) = create_test_store();
        store.load_or_create("kaylee").unwrap();

        store.delete("kaylee").unwrap();
        assert!(!store.exists("kaylee"));
        assert!(store.delete("kaylee").unwrap_err().is_not_found());
    }
}
