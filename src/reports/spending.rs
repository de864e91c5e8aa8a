//! Spending report
//!
//! Spending analysis by category for a date range, computed as a pure read
//! over the account aggregate.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::AccountBook;
use crate::models::Money;

/// Spending breakdown for one category
#[derive(Debug, Clone)]
pub struct CategorySpending {
    /// Category label ("(uncategorized)" for blank categories)
    pub category: String,
    /// Total outflow in the period
    pub total: Money,
    /// Number of transactions
    pub transaction_count: usize,
    /// Share of total spending, 0.0-1.0
    pub share: f64,
}

/// Spending report over a date range
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Inclusive start date (None = unbounded)
    pub start_date: Option<NaiveDate>,
    /// Inclusive end date (None = unbounded)
    pub end_date: Option<NaiveDate>,
    /// Per-category rows, largest spend first
    pub categories: Vec<CategorySpending>,
    /// Total outflow across all categories
    pub total_spending: Money,
    /// Total inflow in the period
    pub total_income: Money,
    /// Total transaction count in the period
    pub total_transactions: usize,
}

/// Label used for transactions without a category
const UNCATEGORIZED: &str = "(uncategorized)";

impl SpendingReport {
    /// Generate a spending report for an optional date range
    pub fn generate(
        book: &AccountBook,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        let in_range = |date: NaiveDate| {
            start_date.map(|s| date >= s).unwrap_or(true)
                && end_date.map(|e| date <= e).unwrap_or(true)
        };

        let mut by_category: HashMap<String, (Money, usize)> = HashMap::new();
        let mut total_spending = Money::zero();
        let mut total_income = Money::zero();
        let mut total_transactions = 0;

        for txn in book.transactions.iter().filter(|t| in_range(t.date)) {
            total_transactions += 1;

            if txn.is_inflow() {
                total_income += txn.amount;
                continue;
            }

            let label = if txn.category.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                txn.category.clone()
            };

            let entry = by_category.entry(label).or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total_spending += txn.amount;
        }

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (total, transaction_count))| {
                let share = if total_spending.is_positive() {
                    total.cents() as f64 / total_spending.cents() as f64
                } else {
                    0.0
                };
                CategorySpending {
                    category,
                    total,
                    transaction_count,
                    share,
                }
            })
            .collect();

        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            start_date,
            end_date,
            categories,
            total_spending,
            total_income,
            total_transactions,
        }
    }

    /// Net flow in the period (income minus spending)
    pub fn net(&self) -> Money {
        self.total_income - self.total_spending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_txn(book: &mut AccountBook, kind: TransactionKind, cents: i64, cat: &str, d: NaiveDate) {
        book.transactions.push(Transaction::with_details(
            kind,
            Money::from_cents(cents),
            d,
            "Store",
            "",
            cat,
            false,
        ));
    }

    fn sample_book() -> AccountBook {
        let mut book = AccountBook::new();
        add_txn(&mut book, TransactionKind::Outflow, 30000, "Food", date(2025, 1, 5));
        add_txn(&mut book, TransactionKind::Outflow, 10000, "Food", date(2025, 1, 12));
        add_txn(&mut book, TransactionKind::Outflow, 10000, "Transport", date(2025, 1, 20));
        add_txn(&mut book, TransactionKind::Inflow, 500000, "Salary", date(2025, 1, 1));
        add_txn(&mut book, TransactionKind::Outflow, 99999, "Food", date(2025, 2, 1));
        book
    }

    #[test]
    fn test_aggregates_by_category() {
        let book = sample_book();
        let report = SpendingReport::generate(
            &book,
            Some(date(2025, 1, 1)),
            Some(date(2025, 1, 31)),
        );

        assert_eq!(report.total_spending.cents(), 50000);
        assert_eq!(report.total_income.cents(), 500000);
        assert_eq!(report.total_transactions, 4);

        // Largest spend first
        assert_eq!(report.categories[0].category, "Food");
        assert_eq!(report.categories[0].total.cents(), 40000);
        assert_eq!(report.categories[0].transaction_count, 2);
        assert!((report.categories[0].share - 0.8).abs() < 1e-9);

        assert_eq!(report.categories[1].category, "Transport");
        assert!((report.categories[1].share - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_unbounded_range_covers_everything() {
        let book = sample_book();
        let report = SpendingReport::generate(&book, None, None);
        assert_eq!(report.total_spending.cents(), 149999);
        assert_eq!(report.total_transactions, 5);
    }

    #[test]
    fn test_uncategorized_bucket() {
        let mut book = AccountBook::new();
        add_txn(&mut book, TransactionKind::Outflow, 1000, "", date(2025, 1, 5));

        let report = SpendingReport::generate(&book, None, None);
        assert_eq!(report.categories[0].category, "(uncategorized)");
    }

    #[test]
    fn test_empty_book_has_no_shares() {
        let book = AccountBook::new();
        let report = SpendingReport::generate(&book, None, None);
        assert!(report.categories.is_empty());
        assert!(report.total_spending.is_zero());
        assert!(report.net().is_zero());
    }

    #[test]
    fn test_net() {
        let book = sample_book();
        let report = SpendingReport::generate(
            &book,
            Some(date(2025, 1, 1)),
            Some(date(2025, 1, 31)),
        );
        assert_eq!(report.net().cents(), 450000);
    }
}
