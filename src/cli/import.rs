//! Import CLI command
//!
//! Reads a CSV export, parses it into candidate records, and applies them to
//! the ledger as one atomic bulk import.

use std::path::PathBuf;

use crate::audit::AuditEntry;
use crate::error::{FintrackError, FintrackResult};
use crate::import::{CsvRecordParser, ImportParser};
use crate::ledger::Ledger;

use super::AppContext;

/// Handle the import command
pub fn handle_import_command(ctx: &AppContext, file: PathBuf) -> FintrackResult<()> {
    let raw = std::fs::read_to_string(&file)
        .map_err(|e| FintrackError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let records = CsvRecordParser::new().parse(&raw)?;
    if records.is_empty() {
        println!("No records found in {}.", file.display());
        return Ok(());
    }

    let mut book = ctx.load_book()?;
    let accepted = Ledger::new(&mut book).import_transactions(&records)?;
    let skipped = records.len() - accepted;
    ctx.save_book(&book)?;
    ctx.audit
        .log(&AuditEntry::import(&ctx.profile, accepted, skipped))?;

    println!(
        "Imported {} transactions ({} duplicates skipped).",
        accepted, skipped
    );
    println!(
        "Balance is now {}",
        book.total_balance.format_with_symbol(&book.currency)
    );

    Ok(())
}
