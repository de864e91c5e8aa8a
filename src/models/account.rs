//! Account aggregate
//!
//! The full in-memory state for one profile: balance, savings, goals,
//! transactions, the active budget policy, the category set, and the display
//! currency. Every ledger operation takes the aggregate explicitly; there is
//! no hidden global state.

use serde::{Deserialize, Serialize};

use super::budget::BudgetPolicy;
use super::category::CategoryBook;
use super::goal::Goal;
use super::ids::{GoalId, TransactionId};
use super::money::Money;
use super::transaction::Transaction;

/// Starter categories seeded into a fresh profile
const STARTER_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Utilities",
    "Entertainment",
    "Health",
    "Other",
];

/// The complete account state for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBook {
    /// Total account balance (signed; can go negative)
    pub total_balance: Money,

    /// Pooled savings set aside from the balance (never negative)
    pub savings: Money,

    /// Savings goals
    #[serde(default)]
    pub goals: Vec<Goal>,

    /// Transactions, kept date-descending for presentation
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// The active budget policy
    #[serde(default)]
    pub budget: BudgetPolicy,

    /// Known category labels
    #[serde(default)]
    pub categories: CategoryBook,

    /// Display currency symbol (cosmetic only, never used in arithmetic)
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for AccountBook {
    fn default() -> Self {
        Self {
            total_balance: Money::zero(),
            savings: Money::zero(),
            goals: Vec::new(),
            transactions: Vec::new(),
            budget: BudgetPolicy::default(),
            categories: CategoryBook::from_labels(STARTER_CATEGORIES),
            currency: default_currency(),
        }
    }
}

impl AccountBook {
    /// Create a fresh account book with the starter category set
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a transaction by id
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Find the position of a transaction by id
    pub fn transaction_index(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    /// Find a goal by id
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Find a goal by id, mutably
    pub fn goal_mut(&mut self, id: GoalId) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }

    /// Total amount earmarked across all goals
    pub fn goals_total(&self) -> Money {
        self.goals.iter().map(|g| g.current_amount).sum()
    }

    /// Balance not already earmarked for savings or goals:
    /// `total_balance - savings - Σ goal.current_amount`
    pub fn usable_balance(&self) -> Money {
        self.total_balance - self.savings - self.goals_total()
    }

    /// Sum of the signed effects of all present transactions
    ///
    /// The balance is always reconstructable as a direct-edit baseline plus
    /// this sum.
    pub fn signed_sum(&self) -> Money {
        self.transactions.iter().map(|t| t.signed_effect()).sum()
    }

    /// Restore the date-descending presentation order
    ///
    /// Ties on the date keep the most recently recorded transaction first.
    pub fn sort_transactions(&mut self) {
        self.transactions
            .sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TransactionKind;
    use chrono::NaiveDate;

    #[test]
    fn test_fresh_book_has_starter_categories() {
        let book = AccountBook::new();
        assert_eq!(book.categories.len(), 7);
        assert!(book.categories.contains("Food"));
        assert!(book.categories.contains("other"));
        assert!(book.total_balance.is_zero());
    }

    #[test]
    fn test_usable_balance() {
        let mut book = AccountBook::new();
        book.total_balance = Money::from_cents(100000);
        book.savings = Money::from_cents(20000);

        let mut goal = Goal::new("Trip", Money::from_cents(50000));
        goal.fund(Money::from_cents(10000));
        book.goals.push(goal);

        assert_eq!(book.usable_balance().cents(), 70000);
    }

    #[test]
    fn test_signed_sum() {
        let mut book = AccountBook::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        book.transactions.push(Transaction::new(
            TransactionKind::Inflow,
            Money::from_cents(10000),
            date,
        ));
        book.transactions.push(Transaction::new(
            TransactionKind::Outflow,
            Money::from_cents(3000),
            date,
        ));

        assert_eq!(book.signed_sum().cents(), 7000);
    }

    #[test]
    fn test_sort_transactions_date_descending() {
        let mut book = AccountBook::new();
        for day in [10u32, 20, 15] {
            book.transactions.push(Transaction::new(
                TransactionKind::Outflow,
                Money::from_cents(100),
                NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            ));
        }

        book.sort_transactions();
        let days: Vec<u32> = book
            .transactions
            .iter()
            .map(|t| chrono::Datelike::day(&t.date))
            .collect();
        assert_eq!(days, vec![20, 15, 10]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut book = AccountBook::new();
        book.total_balance = Money::from_cents(12345);
        book.goals.push(Goal::new("Trip", Money::from_cents(50000)));

        let json = serde_json::to_string(&book).unwrap();
        let deserialized: AccountBook = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.total_balance, book.total_balance);
        assert_eq!(deserialized.goals.len(), 1);
        assert_eq!(deserialized.categories.len(), 7);
    }
}
