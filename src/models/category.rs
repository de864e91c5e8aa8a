//! Category set model
//!
//! An append-only set of category labels, unique case-insensitively and kept
//! sorted alphabetically for display. Categories are never removed: deleting
//! a transaction leaves its category registered.

use serde::{Deserialize, Serialize};

/// The set of known category labels for an account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryBook {
    labels: Vec<String>,
}

impl CategoryBook {
    /// Create an empty category book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a category book from a list of labels, deduplicating
    /// case-insensitively and sorting
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut book = Self::new();
        for label in labels {
            book.register(&label.into());
        }
        book
    }

    /// Register a category label
    ///
    /// Returns `true` if the label was new. Matching is case-insensitive and
    /// the first-seen casing is kept. Blank labels are ignored.
    pub fn register(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.contains(label) {
            return false;
        }

        self.labels.push(label.to_string());
        self.labels
            .sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        true
    }

    /// Check whether a label is already registered (case-insensitive)
    pub fn contains(&self, label: &str) -> bool {
        let needle = label.trim().to_lowercase();
        self.labels.iter().any(|l| l.to_lowercase() == needle)
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no categories are registered
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over labels in display (alphabetical) order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// The labels in display order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_new_label() {
        let mut book = CategoryBook::new();
        assert!(book.register("Food"));
        assert!(book.contains("Food"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let mut book = CategoryBook::new();
        assert!(book.register("Food"));
        assert!(!book.register("food"));
        assert!(!book.register("FOOD"));
        assert_eq!(book.len(), 1);
        // First-seen casing is kept
        assert_eq!(book.labels(), &["Food".to_string()]);
    }

    #[test]
    fn test_sorted_alphabetically() {
        let mut book = CategoryBook::new();
        book.register("Transport");
        book.register("Food");
        book.register("apparel");

        let labels: Vec<&str> = book.iter().collect();
        assert_eq!(labels, vec!["apparel", "Food", "Transport"]);
    }

    #[test]
    fn test_blank_labels_ignored() {
        let mut book = CategoryBook::new();
        assert!(!book.register(""));
        assert!(!book.register("   "));
        assert!(book.is_empty());
    }

    #[test]
    fn test_from_labels() {
        let book = CategoryBook::from_labels(["Food", "food", "Transport"]);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_serialization_is_plain_list() {
        let book = CategoryBook::from_labels(["Food", "Transport"]);
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"["Food","Transport"]"#);

        let deserialized: CategoryBook = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.len(), 2);
    }
}
