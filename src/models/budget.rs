//! Budget policy model
//!
//! A single active spending policy per account: a daily or monthly limit.
//! Setting a new policy replaces the previous one wholesale; no history is
//! retained.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// The cadence of the budget limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// The limit applies to each calendar day
    Daily,
    /// The limit applies to each calendar month
    #[default]
    Monthly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(format!("Unknown budget period: '{}'", other)),
        }
    }
}

/// The active budget policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BudgetPolicy {
    /// Cadence of the limit
    pub period: BudgetPeriod,

    /// Spending limit for the period (non-negative; zero means no budget)
    pub limit: Money,
}

impl BudgetPolicy {
    /// Create a new budget policy
    pub fn new(period: BudgetPeriod, limit: Money) -> Self {
        Self { period, limit }
    }

    /// Whether a meaningful limit is set
    pub fn has_limit(&self) -> bool {
        self.limit.is_positive()
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit(self.limit));
        }
        Ok(())
    }
}

impl fmt::Display for BudgetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} limit: {}", self.period, self.limit)
    }
}

/// Validation errors for budget policies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit(limit) => {
                write!(f, "Budget limit cannot be negative, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
