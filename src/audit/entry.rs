//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which ledger operation ran,
//! on which entity, and what changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was updated
    Update,
    /// Entity was deleted
    Delete,
    /// Bulk import applied as one transition
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Budget,
    Goal,
    Savings,
    Balance,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Goal => write!(f, "Goal"),
            EntityType::Savings => write!(f, "Savings"),
            EntityType::Balance => write!(f, "Balance"),
        }
    }
}

/// A single audit log entry
///
/// Records one ledger mutation with optional before/after snapshots for
/// tracking changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// The profile whose aggregate was mutated
    pub profile: String,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity (empty for aggregate-wide operations)
    #[serde(default)]
    pub entity_id: String,

    /// JSON snapshot of the entity before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON snapshot of the entity after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: serde::Serialize>(
        profile: impl Into<String>,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            profile: profile.into(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            before: None,
            after: serde_json::to_value(entity).ok(),
            summary: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update<T: serde::Serialize>(
        profile: impl Into<String>,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            profile: profile.into(),
            operation: Operation::Update,
            entity_type,
            entity_id: entity_id.into(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary,
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: serde::Serialize>(
        profile: impl Into<String>,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            profile: profile.into(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            before: serde_json::to_value(entity).ok(),
            after: None,
            summary: None,
        }
    }

    /// Create a new audit entry for a bulk import
    pub fn import(profile: impl Into<String>, accepted: usize, skipped: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            profile: profile.into(),
            operation: Operation::Import,
            entity_type: EntityType::Transaction,
            entity_id: String::new(),
            before: None,
            after: None,
            summary: Some(format!(
                "imported {} records, skipped {} duplicates",
                accepted, skipped
            )),
        }
    }

    /// Attach a human-readable summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// One-line rendering for the audit CLI
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "{} [{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.profile,
            self.operation,
            self.entity_type,
        );
        if !self.entity_id.is_empty() {
            line.push(' ');
            line.push_str(&self.entity_id);
        }
        if let Some(summary) = &self.summary {
            line.push_str(" - ");
            line.push_str(summary);
        }
        line
    }
}
