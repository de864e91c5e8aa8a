//! Export module for FinTrack
//!
//! Provides data export in multiple formats:
//! - CSV: the transaction register (spreadsheet-compatible)
//! - JSON: machine-readable full profile export
//! - YAML: human-readable full profile export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};

use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown export format: '{}'", other)),
        }
    }
}
