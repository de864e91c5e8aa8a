//! Transaction filtering
//!
//! Builder-style filter used by the transaction list, reports and exports.
//! Filters are pure reads over the aggregate's transaction set.

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionKind};

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring match over merchant and description
    pub search: Option<String>,
    /// Case-insensitive category match
    pub category: Option<String>,
    /// Filter by direction
    pub kind: Option<TransactionKind>,
    /// Inclusive start of a date range
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of a date range
    pub end_date: Option<NaiveDate>,
    /// Drop outflows marked budget-exempt
    pub hide_budget_exempt: bool,
}

impl TransactionFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Match merchant or description against a search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by transaction kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Hide budget-exempt outflows
    pub fn hide_budget_exempt(mut self) -> Self {
        self.hide_budget_exempt = true;
        self
    }

    /// Check whether a single transaction passes the filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = txn.merchant.to_lowercase().contains(&term)
                || txn.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !txn.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if let Some(start) = self.start_date {
            if txn.date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if txn.date > end {
                return false;
            }
        }

        if self.hide_budget_exempt && txn.exclude_from_budget {
            return false;
        }

        true
    }

    /// Apply the filter, preserving the input order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn txn(kind: TransactionKind, merchant: &str, category: &str, day: u32) -> Transaction {
        Transaction::with_details(
            kind,
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            merchant,
            "",
            category,
            false,
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(TransactionKind::Outflow, "BigBasket", "Food", 10),
            txn(TransactionKind::Outflow, "Uber", "Transport", 12),
            txn(TransactionKind::Inflow, "Acme Corp", "Salary", 15),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let txns = sample();
        assert_eq!(TransactionFilter::new().apply(&txns).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let txns = sample();
        let found = TransactionFilter::new().search("bigbasket").apply(&txns);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].merchant, "BigBasket");
    }

    #[test]
    fn test_search_matches_description() {
        let mut txns = sample();
        txns[1].description = "Airport drop".to_string();
        let found = TransactionFilter::new().search("airport").apply(&txns);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let txns = sample();
        let found = TransactionFilter::new().category("food").apply(&txns);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Food");
    }

    #[test]
    fn test_kind_filter() {
        let txns = sample();
        let found = TransactionFilter::new()
            .kind(TransactionKind::Inflow)
            .apply(&txns);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].merchant, "Acme Corp");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let txns = sample();
        let found = TransactionFilter::new()
            .date_range(
                NaiveDate::from_ymd_opt(2025, 1, 10),
                NaiveDate::from_ymd_opt(2025, 1, 12),
            )
            .apply(&txns);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_hide_budget_exempt() {
        let mut txns = sample();
        txns[0].exclude_from_budget = true;
        let found = TransactionFilter::new().hide_budget_exempt().apply(&txns);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_filters_combine() {
        let txns = sample();
        let found = TransactionFilter::new()
            .kind(TransactionKind::Outflow)
            .category("Transport")
            .apply(&txns);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].merchant, "Uber");
    }
}
