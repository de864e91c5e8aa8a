//! YAML export functionality
//!
//! Exports a profile's aggregate to YAML for human-readable backup.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::AccountBook;

use super::json::FullExport;

/// Export a profile's aggregate to YAML format
pub fn export_full_yaml<W: Write>(
    profile: &str,
    book: &AccountBook,
    writer: &mut W,
) -> FintrackResult<()> {
    let export = FullExport::new(profile, book);

    writeln!(writer, "# FinTrack profile export")
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer, "# Keep it secure - it contains all your financial data.")
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

/// Parse a YAML export back into the envelope
pub fn import_from_yaml(yaml_str: &str) -> FintrackResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| FintrackError::Import(e.to_string()))?;

    export.validate().map_err(FintrackError::Import)?;

    Ok(export)
}
