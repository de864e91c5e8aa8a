//! Export CLI command

use std::io::Write;
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{
    export_full_json, export_full_yaml, export_transactions_csv, ExportFormat,
};

use super::AppContext;

/// Handle the export command
///
/// Writes to stdout unless an output path is given.
pub fn handle_export_command(
    ctx: &AppContext,
    format: String,
    output: Option<PathBuf>,
) -> FintrackResult<()> {
    let format: ExportFormat = format.parse().map_err(FintrackError::Validation)?;
    let book = ctx.load_book()?;

    let mut buffer = Vec::new();
    match format {
        ExportFormat::Csv => export_transactions_csv(&book.transactions, &mut buffer)?,
        ExportFormat::Json => export_full_json(&ctx.profile, &book, &mut buffer)?,
        ExportFormat::Yaml => export_full_yaml(&ctx.profile, &book, &mut buffer)?,
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &buffer)
                .map_err(|e| FintrackError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
            println!("Exported to {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(&buffer)
                .map_err(|e| FintrackError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
