//! Budget pacing computations
//!
//! Pure read computations over the account aggregate: month-to-date and
//! same-day spend, and the daily spending guideline derived from the active
//! budget policy. All arithmetic is integer cents, so no day-of-month edge
//! case can produce NaN or infinity.

use chrono::{Datelike, NaiveDate};

use crate::models::{AccountBook, BudgetPeriod, Money};

/// Derived spending metrics for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetPacing {
    /// Sum of budget-relevant outflows in the current calendar month
    pub monthly_spend: Money,

    /// Sum of budget-relevant outflows dated today
    pub daily_spend: Money,

    /// How much may still be spent today to stay on pace; never negative
    pub daily_guideline: Money,
}

/// Compute pacing metrics for the given calendar date
///
/// Only outflows count, and outflows marked budget-exempt are skipped. For a
/// monthly policy the guideline spreads the remaining headroom over the days
/// left in the month (today included); for a daily policy the guideline is
/// the limit itself. A blown budget yields a guideline of zero, not a
/// negative value.
pub fn budget_pacing(book: &AccountBook, today: NaiveDate) -> BudgetPacing {
    let monthly_spend: Money = book
        .transactions
        .iter()
        .filter(|t| t.counts_toward_budget())
        .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
        .map(|t| t.amount)
        .sum();

    let daily_spend: Money = book
        .transactions
        .iter()
        .filter(|t| t.counts_toward_budget() && t.date == today)
        .map(|t| t.amount)
        .sum();

    let daily_guideline = match book.budget.period {
        BudgetPeriod::Daily => book.budget.limit,
        BudgetPeriod::Monthly => {
            let days_elapsed = i64::from(today.day()) - 1;
            let days_remaining = days_in_month(today.year(), today.month()) - days_elapsed;
            let remaining_budget = book.budget.limit - monthly_spend;

            if days_remaining <= 0 || !remaining_budget.is_positive() {
                Money::zero()
            } else {
                Money::from_cents(remaining_budget.cents() / days_remaining)
            }
        }
    };

    BudgetPacing {
        monthly_spend,
        daily_spend,
        daily_guideline,
    }
}

/// Fraction of a limit consumed, for progress bars: capped at 1.0, and `None`
/// when no limit is set (a zero limit is "no percentage", not a division
/// error).
pub fn spend_fraction(spend: Money, limit: Money) -> Option<f64> {
    if !limit.is_positive() {
        return None;
    }
    Some((spend.cents() as f64 / limit.cents() as f64).clamp(0.0, 1.0))
}

/// Number of days in a calendar month
fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    (next - first).num_days()
}
