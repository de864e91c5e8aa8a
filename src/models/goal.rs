//! Savings goal model
//!
//! A goal earmarks part of the balance toward a named target. `current_amount`
//! only grows, and only through funding operations on the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name (e.g., "Emergency Fund")
    pub name: String,

    /// Amount to save toward (always positive)
    pub target_amount: Money,

    /// Amount funded so far (never negative, never decreased)
    pub current_amount: Money,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last funded or modified
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new, unfunded goal
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into().trim().to_string(),
            target_amount,
            current_amount: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Record funding toward this goal
    pub fn fund(&mut self, amount: Money) {
        self.current_amount += amount;
        self.updated_at = Utc::now();
    }

    /// Fraction of the target reached, capped at 1.0
    pub fn progress_fraction(&self) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        let fraction = self.current_amount.cents() as f64 / self.target_amount.cents() as f64;
        fraction.min(1.0)
    }

    /// Whether the goal is fully funded
    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be positive, got {}", target)
            }
            Self::NegativeCurrent(current) => {
                write!(f, "Goal funding cannot be negative, got {}", current)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal() {
        let goal = Goal::new("Emergency Fund", Money::from_cents(100000));
        assert_eq!(goal.name, "Emergency Fund");
        assert_eq!(goal.target_amount.cents(), 100000);
        assert!(goal.current_amount.is_zero());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_fund() {
        let mut goal = Goal::new("Trip", Money::from_cents(50000));
        goal.fund(Money::from_cents(20000));
        assert_eq!(goal.current_amount.cents(), 20000);
        assert!(!goal.is_reached());

        goal.fund(Money::from_cents(30000));
        assert!(goal.is_reached());
    }

    #[test]
    fn test_progress_fraction() {
        let mut goal = Goal::new("Trip", Money::from_cents(10000));
        assert_eq!(goal.progress_fraction(), 0.0);

        goal.fund(Money::from_cents(2500));
        assert!((goal.progress_fraction() - 0.25).abs() < f64::EPSILON);

        // Overfunding caps at 1.0
        goal.fund(Money::from_cents(20000));
        assert_eq!(goal.progress_fraction(), 1.0);
    }

    #[test]
    fn test_validation() {
        let goal = Goal::new("", Money::from_cents(1000));
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        let goal = Goal::new("Trip", Money::zero());
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let goal = Goal::new("Laptop", Money::from_cents(7500000));
        let json = serde_json::to_string(&goal).unwrap();
        let deserialized: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal.id, deserialized.id);
        assert_eq!(goal.target_amount, deserialized.target_amount);
    }
}
