//! Ledger reconciliation engine
//!
//! Every mutation of the account aggregate goes through this module so that
//! `total_balance`, `savings`, goal allocations and the category set stay
//! mutually consistent. Operations validate their input completely before
//! touching any field: a failed operation leaves the aggregate exactly as it
//! was, and a successful one is a single atomic transition.
//!
//! The engine holds no I/O and no hidden state; callers own the aggregate's
//! lifecycle and decide when to persist it.

pub mod filter;
pub mod pacing;

pub use filter::TransactionFilter;
pub use pacing::{budget_pacing, spend_fraction, BudgetPacing};

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::import::ParsedRecord;
use crate::models::{
    AccountBook, BudgetPeriod, BudgetPolicy, Goal, GoalId, Money, Transaction, TransactionId,
    TransactionKind,
};

/// Input for creating or replacing a transaction
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: Money,
    pub date: NaiveDate,
    pub merchant: String,
    pub description: String,
    pub category: String,
    pub exclude_from_budget: bool,
}

impl TransactionDraft {
    fn build(&self) -> FintrackResult<Transaction> {
        let txn = Transaction::with_details(
            self.kind,
            self.amount,
            self.date,
            self.merchant.clone(),
            self.description.clone(),
            self.category.clone(),
            self.exclude_from_budget,
        );

        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        Ok(txn)
    }
}

/// Composite key for duplicate detection during bulk import:
/// date, amount, kind, and the case-insensitive merchant-or-description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DedupKey {
    date: NaiveDate,
    amount_cents: i64,
    kind: TransactionKind,
    label: String,
}

impl DedupKey {
    fn of_transaction(txn: &Transaction) -> Self {
        Self {
            date: txn.date,
            amount_cents: txn.amount.cents(),
            kind: txn.kind,
            label: txn.merchant_or_description().to_lowercase(),
        }
    }

    fn of_record(record: &ParsedRecord) -> Self {
        Self {
            date: record.date,
            amount_cents: record.amount.cents(),
            kind: record.kind,
            label: record.merchant_or_description().to_lowercase(),
        }
    }
}

/// The reconciliation engine over one account aggregate
pub struct Ledger<'a> {
    book: &'a mut AccountBook,
}

impl<'a> Ledger<'a> {
    /// Create an engine over the given aggregate
    pub fn new(book: &'a mut AccountBook) -> Self {
        Self { book }
    }

    /// Read-only view of the aggregate
    pub fn book(&self) -> &AccountBook {
        self.book
    }

    /// Add a single transaction
    ///
    /// Registers its category and applies its signed effect to the balance.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> FintrackResult<Transaction> {
        let txn = draft.build()?;

        self.book.categories.register(&txn.category);
        self.book.total_balance += txn.signed_effect();
        self.book.transactions.push(txn.clone());
        self.book.sort_transactions();

        Ok(txn)
    }

    /// Replace an existing transaction's fields
    ///
    /// The balance moves by the delta between the new and old signed effects;
    /// the stored record is swapped in one step, preserving id and creation
    /// time.
    pub fn edit_transaction(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> FintrackResult<Transaction> {
        let index = self
            .book
            .transaction_index(id)
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        let mut replacement = draft.build()?;
        let old = &self.book.transactions[index];
        replacement.id = old.id;
        replacement.created_at = old.created_at;

        let delta = replacement.signed_effect() - old.signed_effect();

        self.book.categories.register(&replacement.category);
        self.book.total_balance += delta;
        self.book.transactions[index] = replacement.clone();
        self.book.sort_transactions();

        Ok(replacement)
    }

    /// Delete a transaction, reversing its effect on the balance
    ///
    /// Its category stays registered; the category set is append-only.
    pub fn delete_transaction(&mut self, id: TransactionId) -> FintrackResult<Transaction> {
        let index = self
            .book
            .transaction_index(id)
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        let txn = self.book.transactions.remove(index);
        self.book.total_balance -= txn.signed_effect();

        Ok(txn)
    }

    /// Bulk-import parsed records as one atomic transition
    ///
    /// Every record is validated before anything is mutated. Records matching
    /// an existing transaction (or an earlier record in the same batch) on the
    /// composite key are silently dropped, so re-importing a batch accepts
    /// nothing. Returns the number of accepted records.
    pub fn import_transactions(&mut self, records: &[ParsedRecord]) -> FintrackResult<usize> {
        for (idx, record) in records.iter().enumerate() {
            if !record.amount.is_positive() {
                return Err(FintrackError::Validation(format!(
                    "Imported record {} has non-positive amount {}",
                    idx + 1,
                    record.amount
                )));
            }
        }

        let mut seen: HashSet<DedupKey> = self
            .book
            .transactions
            .iter()
            .map(DedupKey::of_transaction)
            .collect();

        let mut accepted = Vec::new();
        let mut delta = Money::zero();

        for record in records {
            if !seen.insert(DedupKey::of_record(record)) {
                continue;
            }

            let txn = Transaction::with_details(
                record.kind,
                record.amount,
                record.date,
                record.merchant.clone(),
                record.description.clone(),
                record.category.clone(),
                false,
            );
            delta += txn.signed_effect();
            accepted.push(txn);
        }

        for txn in &accepted {
            self.book.categories.register(&txn.category);
        }
        let count = accepted.len();
        self.book.transactions.extend(accepted);
        self.book.sort_transactions();
        self.book.total_balance += delta;

        Ok(count)
    }

    /// Replace the active budget policy wholesale
    pub fn set_budget(&mut self, period: BudgetPeriod, limit: Money) -> FintrackResult<BudgetPolicy> {
        let policy = BudgetPolicy::new(period, limit);
        policy
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.book.budget = policy;
        Ok(policy)
    }

    /// Create a new savings goal
    pub fn add_goal(&mut self, name: &str, target_amount: Money) -> FintrackResult<Goal> {
        let goal = Goal::new(name, target_amount);
        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.book.goals.push(goal.clone());
        Ok(goal)
    }

    /// Fund a goal from the balance
    ///
    /// The amount moves out of `total_balance` into the goal's earmarked pool.
    pub fn fund_goal(&mut self, id: GoalId, amount: Money) -> FintrackResult<Goal> {
        if !amount.is_positive() {
            return Err(FintrackError::Validation(format!(
                "Funding amount must be positive, got {}",
                amount
            )));
        }

        if self.book.goal(id).is_none() {
            return Err(FintrackError::goal_not_found(id.to_string()));
        }

        if amount > self.book.total_balance {
            return Err(FintrackError::InsufficientFunds {
                needed: amount.cents(),
                available: self.book.total_balance.cents(),
            });
        }

        self.book.total_balance -= amount;
        let goal = self
            .book
            .goal_mut(id)
            .ok_or_else(|| FintrackError::goal_not_found(id.to_string()))?;
        goal.fund(amount);

        Ok(goal.clone())
    }

    /// Move part of the balance into the pooled savings
    ///
    /// Returns the new savings total.
    pub fn add_to_savings(&mut self, amount: Money) -> FintrackResult<Money> {
        if !amount.is_positive() {
            return Err(FintrackError::Validation(format!(
                "Savings amount must be positive, got {}",
                amount
            )));
        }

        if amount > self.book.total_balance {
            return Err(FintrackError::InsufficientFunds {
                needed: amount.cents(),
                available: self.book.total_balance.cents(),
            });
        }

        self.book.total_balance -= amount;
        self.book.savings += amount;

        Ok(self.book.savings)
    }

    /// Directly override the total balance, bypassing transaction history
    ///
    /// Used for initial setup and corrections. Returns the previous balance.
    pub fn edit_balance(&mut self, new_value: Money) -> Money {
        std::mem::replace(&mut self.book.total_balance, new_value)
    }
}
