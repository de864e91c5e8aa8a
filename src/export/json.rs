//! JSON export functionality
//!
//! Exports a profile's complete account aggregate in a machine-readable,
//! versioned envelope.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::models::AccountBook;

/// Schema version of the export envelope
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// A complete, versioned export of one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Export schema version
    pub schema_version: u32,

    /// When the export was generated (UTC)
    pub exported_at: DateTime<Utc>,

    /// App version that produced the export
    pub app_version: String,

    /// Profile the data belongs to
    pub profile: String,

    /// The full account aggregate
    pub book: AccountBook,
}

impl FullExport {
    /// Build an export envelope for a profile
    pub fn new(profile: impl Into<String>, book: &AccountBook) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: profile.into(),
            book: book.clone(),
        }
    }

    /// Validate an export before using it for a restore
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version > EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Export schema version {} is newer than supported version {}",
                self.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }
        Ok(())
    }
}

/// Export a profile's aggregate to pretty-printed JSON
pub fn export_full_json<W: Write>(
    profile: &str,
    book: &AccountBook,
    writer: &mut W,
) -> FintrackResult<()> {
    let export = FullExport::new(profile, book);

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_export_and_parse_back() {
        let mut book = AccountBook::new();
        book.total_balance = Money::from_cents(12345);

        let mut out = Vec::new();
        export_full_json("kaylee", &book, &mut out).unwrap();

        let parsed: FullExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.profile, "kaylee");
        assert_eq!(parsed.book.total_balance.cents(), 12345);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_newer_schema() {
        let book = AccountBook::new();
        let mut export = FullExport::new("kaylee", &book);
        export.schema_version = EXPORT_SCHEMA_VERSION + 1;
        assert!(export.validate().is_err());
    }
}
