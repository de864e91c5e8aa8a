//! Monthly summary report
//!
//! Per-month inflow/outflow totals across the whole register, newest month
//! first.

use chrono::Datelike;
use std::collections::BTreeMap;

use crate::models::{AccountBook, Money};

/// Totals for a single calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    /// Total inflow recorded in the month
    pub inflow: Money,
    /// Total outflow recorded in the month
    pub outflow: Money,
    /// Number of transactions in the month
    pub transaction_count: usize,
}

impl MonthSummary {
    /// Net flow for the month
    pub fn net(&self) -> Money {
        self.inflow - self.outflow
    }

    /// "2025-01" style label
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Monthly inflow/outflow summary
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// One row per month with activity, newest first
    pub months: Vec<MonthSummary>,
}

impl MonthlyReport {
    /// Generate the report from the aggregate
    pub fn generate(book: &AccountBook) -> Self {
        let mut by_month: BTreeMap<(i32, u32), MonthSummary> = BTreeMap::new();

        for txn in &book.transactions {
            let key = (txn.date.year(), txn.date.month());
            let entry = by_month.entry(key).or_insert(MonthSummary {
                year: key.0,
                month: key.1,
                inflow: Money::zero(),
                outflow: Money::zero(),
                transaction_count: 0,
            });

            if txn.is_inflow() {
                entry.inflow += txn.amount;
            } else {
                entry.outflow += txn.amount;
            }
            entry.transaction_count += 1;
        }

        let months = by_month.into_values().rev().collect();
        Self { months }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn add_txn(book: &mut AccountBook, kind: TransactionKind, cents: i64, y: i32, m: u32, d: u32) {
        book.transactions.push(Transaction::with_details(
            kind,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            "Store",
            "",
            "Other",
            false,
        ));
    }

    #[test]
    fn test_groups_by_month_newest_first() {
        let mut book = AccountBook::new();
        add_txn(&mut book, TransactionKind::Inflow, 500000, 2025, 1, 1);
        add_txn(&mut book, TransactionKind::Outflow, 30000, 2025, 1, 10);
        add_txn(&mut book, TransactionKind::Outflow, 20000, 2025, 2, 3);
        add_txn(&mut book, TransactionKind::Outflow, 10000, 2024, 12, 28);

        let report = MonthlyReport::generate(&book);
        assert_eq!(report.months.len(), 3);
        assert_eq!(report.months[0].label(), "2025-02");
        assert_eq!(report.months[1].label(), "2025-01");
        assert_eq!(report.months[2].label(), "2024-12");

        let january = &report.months[1];
        assert_eq!(january.inflow.cents(), 500000);
        assert_eq!(january.outflow.cents(), 30000);
        assert_eq!(january.net().cents(), 470000);
        assert_eq!(january.transaction_count, 2);
    }

    #[test]
    fn test_empty_book() {
        let report = MonthlyReport::generate(&AccountBook::new());
        assert!(report.months.is_empty());
    }
}
