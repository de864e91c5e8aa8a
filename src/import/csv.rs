//! CSV import parser
//!
//! Parses transaction exports in a simple fixed-column CSV layout:
//! `date,kind,amount,merchant[,description[,category]]`. The header row is
//! optional and detected by checking whether the first field parses as a
//! date. Any malformed row fails the whole parse with a single error.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionKind};

use super::{ImportParser, ParsedRecord};

/// Date formats attempted, in order, for every date field
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d",
];

/// Parses the fixed-column CSV transaction format
#[derive(Debug, Clone, Default)]
pub struct CsvRecordParser;

impl CsvRecordParser {
    /// Create a new CSV parser
    pub fn new() -> Self {
        Self
    }

    fn parse_record(&self, record: &StringRecord, row: usize) -> FintrackResult<ParsedRecord> {
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");

        let date = parse_date(field(0)).ok_or_else(|| {
            FintrackError::Import(format!("Row {}: could not parse date '{}'", row, field(0)))
        })?;

        let kind = TransactionKind::parse(field(1)).ok_or_else(|| {
            FintrackError::Import(format!(
                "Row {}: unknown transaction kind '{}'",
                row,
                field(1)
            ))
        })?;

        let amount = Money::parse(field(2)).map_err(|e| {
            FintrackError::Import(format!("Row {}: could not parse amount: {}", row, e))
        })?;

        Ok(ParsedRecord {
            date,
            kind,
            amount: amount.abs(),
            merchant: field(3).to_string(),
            description: field(4).to_string(),
            category: field(5).to_string(),
        })
    }
}

impl ImportParser for CsvRecordParser {
    fn parse(&self, raw: &str) -> FintrackResult<Vec<ParsedRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_bytes());

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result
                .map_err(|e| FintrackError::Import(format!("Row {}: {}", idx + 1, e)))?;

            // Skip an optional header row: real data rows start with a date
            if idx == 0 && !looks_like_data_row(&record) {
                continue;
            }

            // Skip fully blank rows
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            records.push(self.parse_record(&record, idx + 1)?);
        }

        Ok(records)
    }
}

/// Try the known date formats in order
fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// A row whose first field parses as a date is data, not a header
fn looks_like_data_row(record: &StringRecord) -> bool {
    record
        .get(0)
        .map(|first| parse_date(first.trim()).is_some())
        .unwrap_or(false)
}
