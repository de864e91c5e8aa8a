//! Transaction model
//!
//! Represents a single inflow or outflow with its merchant, category, and
//! budget-exemption flag.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction: money in (credit) or money out (debit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit: money entering the account
    Inflow,
    /// Debit: money leaving the account
    Outflow,
}

impl TransactionKind {
    /// Parse a kind from the strings import sources typically use
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "inflow" | "credit" | "income" | "in" => Some(Self::Inflow),
            "outflow" | "debit" | "expense" | "out" => Some(Self::Outflow),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow => write!(f, "Inflow"),
            Self::Outflow => write!(f, "Outflow"),
        }
    }
}

/// A single ledger transaction
///
/// `amount` is always positive; the direction of its effect on the balance is
/// carried by `kind`. `exclude_from_budget` is only meaningful for outflows
/// and is forced to `false` for inflows at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Direction of the transaction
    pub kind: TransactionKind,

    /// Magnitude of the transaction (always positive)
    pub amount: Money,

    /// Transaction date (no time component)
    pub date: NaiveDate,

    /// Merchant or source name
    #[serde(default)]
    pub merchant: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Whether this outflow is exempt from budget/spend metrics
    #[serde(default)]
    pub exclude_from_budget: bool,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// Inflows never carry the budget-exemption flag, so it is cleared here
    /// regardless of what the caller passed.
    pub fn new(kind: TransactionKind, amount: Money, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            date,
            merchant: String::new(),
            description: String::new(),
            category: String::new(),
            exclude_from_budget: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction with all common fields
    pub fn with_details(
        kind: TransactionKind,
        amount: Money,
        date: NaiveDate,
        merchant: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        exclude_from_budget: bool,
    ) -> Self {
        let mut txn = Self::new(kind, amount, date);
        txn.merchant = merchant.into().trim().to_string();
        txn.description = description.into().trim().to_string();
        txn.category = category.into().trim().to_string();
        txn.exclude_from_budget = exclude_from_budget && kind == TransactionKind::Outflow;
        txn
    }

    /// Check if this is an inflow
    pub fn is_inflow(&self) -> bool {
        self.kind == TransactionKind::Inflow
    }

    /// Check if this is an outflow
    pub fn is_outflow(&self) -> bool {
        self.kind == TransactionKind::Outflow
    }

    /// Signed effect of this transaction on the total balance:
    /// `+amount` for inflows, `-amount` for outflows.
    pub fn signed_effect(&self) -> Money {
        match self.kind {
            TransactionKind::Inflow => self.amount,
            TransactionKind::Outflow => -self.amount,
        }
    }

    /// Whether this outflow counts toward budget/spend metrics
    pub fn counts_toward_budget(&self) -> bool {
        self.is_outflow() && !self.exclude_from_budget
    }

    /// The label used for display and duplicate detection: the merchant if
    /// present, otherwise the description.
    pub fn merchant_or_description(&self) -> &str {
        if self.merchant.is_empty() {
            &self.description
        } else {
            &self.merchant
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.is_inflow() && self.exclude_from_budget {
            return Err(TransactionValidationError::InflowMarkedExempt);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.merchant_or_description(),
            self.signed_effect()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    InflowMarkedExempt,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::InflowMarkedExempt => {
                write!(f, "Inflows cannot be excluded from the budget")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
