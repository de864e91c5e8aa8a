//! Audit logger for the append-only audit log
//!
//! Writes audit entries to a log file as line-delimited JSON (JSONL): each
//! line is one complete entry, flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{FintrackError, FintrackResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an audit entry
    ///
    /// Appends the entry as a JSON line and flushes immediately.
    pub fn log(&self, entry: &AuditEntry) -> FintrackResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| FintrackError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| FintrackError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| FintrackError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file
    ///
    /// Returns entries in chronological order (oldest first). Lines that fail
    /// to parse are skipped rather than failing the whole read.
    pub fn read_all(&self) -> FintrackResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| FintrackError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line =
                line.map_err(|e| FintrackError::Io(format!("Failed to read audit log: {}", e)))?;
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(entry) = serde_json::from_str(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Read the most recent `limit` entries, newest first
    pub fn read_recent(&self, limit: usize) -> FintrackResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }
}
