//! Audit logging for ledger mutations
//!
//! Every mutation of an account aggregate can be recorded as an append-only
//! JSONL entry: what ran, on which profile, and what changed. The log is the
//! observability surface of the application; reads never log.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
