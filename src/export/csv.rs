//! CSV export functionality
//!
//! Exports the transaction register to a spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

/// Export transactions to CSV, one row per transaction
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FintrackResult<()> {
    writeln!(
        writer,
        "ID,Date,Kind,Amount,Merchant,Description,Category,Excluded From Budget"
    )
    .map_err(|e| FintrackError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            txn.id,
            txn.date,
            txn.kind,
            txn.amount,
            escape_csv(&txn.merchant),
            escape_csv(&txn.description),
            escape_csv(&txn.category),
            txn.exclude_from_budget
        )
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field: quote when it contains a comma, quote, or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
