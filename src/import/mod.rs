//! Import parser collaborators
//!
//! An import parser turns raw text (an SMS export, a bank CSV) into candidate
//! transaction records. Parsers may return zero records; a parse failure
//! surfaces as a single error and is never retried here. Deduplication and
//! balance reconciliation happen later, in the ledger engine.

pub mod csv;

pub use csv::CsvRecordParser;

use chrono::NaiveDate;

use crate::error::FintrackResult;
use crate::models::{Money, TransactionKind};

/// A candidate transaction produced by an import parser
///
/// Carries no id: the ledger assigns a fresh one to every accepted record.
#[derive(Debug, Clone)]
pub struct ParsedRecord {
    /// Transaction date
    pub date: NaiveDate,
    /// Direction of the transaction
    pub kind: TransactionKind,
    /// Magnitude (expected positive; the ledger validates)
    pub amount: Money,
    /// Merchant or source name
    pub merchant: String,
    /// Free-text description
    pub description: String,
    /// Category label (may be empty)
    pub category: String,
}

impl ParsedRecord {
    /// The label used for duplicate detection: merchant if present,
    /// otherwise the description.
    pub fn merchant_or_description(&self) -> &str {
        if self.merchant.is_empty() {
            &self.description
        } else {
            &self.merchant
        }
    }
}

/// Contract for import parsers
///
/// Implementations turn one blob of raw text into candidate records.
pub trait ImportParser {
    /// Parse raw text into candidate transaction records
    fn parse(&self, raw: &str) -> FintrackResult<Vec<ParsedRecord>>;
}
