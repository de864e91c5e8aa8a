//! Dashboard rendering
//!
//! Formats the account overview: balances, budget pacing and goal progress.

use crate::ledger::pacing::{spend_fraction, BudgetPacing};
use crate::models::{AccountBook, BudgetPeriod};

/// Width of the textual progress bars
const BAR_WIDTH: usize = 24;

/// Render the dashboard for one account aggregate
pub fn format_dashboard(book: &AccountBook, pacing: &BudgetPacing) -> String {
    let currency = book.currency.as_str();
    let mut out = String::new();

    out.push_str(&format!(
        "Total Balance:   {}\n",
        book.total_balance.format_with_symbol(currency)
    ));
    out.push_str(&format!(
        "Usable Balance:  {}\n",
        book.usable_balance().format_with_symbol(currency)
    ));
    out.push_str(&format!(
        "Savings:         {}\n",
        book.savings.format_with_symbol(currency)
    ));
    out.push('\n');

    out.push_str("Budget\n");
    if !book.budget.has_limit() {
        out.push_str("  No budget set. Use `fintrack budget set` to create one.\n");
    } else {
        match book.budget.period {
            BudgetPeriod::Monthly => {
                out.push_str(&format!(
                    "  Monthly spending  {} of {}  {}\n",
                    pacing.monthly_spend.format_with_symbol(currency),
                    book.budget.limit.format_with_symbol(currency),
                    progress_bar(spend_fraction(pacing.monthly_spend, book.budget.limit)),
                ));
                out.push_str(&format!(
                    "  Today's guideline {} of ~{}  {}\n",
                    pacing.daily_spend.format_with_symbol(currency),
                    pacing.daily_guideline.format_with_symbol(currency),
                    progress_bar(spend_fraction(pacing.daily_spend, pacing.daily_guideline)),
                ));
            }
            BudgetPeriod::Daily => {
                out.push_str(&format!(
                    "  Daily spending    {} of {}  {}\n",
                    pacing.daily_spend.format_with_symbol(currency),
                    book.budget.limit.format_with_symbol(currency),
                    progress_bar(spend_fraction(pacing.daily_spend, book.budget.limit)),
                ));
            }
        }
    }
    out.push('\n');

    out.push_str("Goals\n");
    if book.goals.is_empty() {
        out.push_str("  No goals yet. Add one with `fintrack goal add`.\n");
    } else {
        for goal in &book.goals {
            out.push_str(&format!(
                "  {} [{}]  {} / {}  {}\n",
                goal.name,
                goal.id,
                goal.current_amount.format_with_symbol(currency),
                goal.target_amount.format_with_symbol(currency),
                progress_bar(Some(goal.progress_fraction())),
            ));
        }
    }

    out
}

/// Render a textual progress bar; a missing fraction renders as empty
fn progress_bar(fraction: Option<f64>) -> String {
    let fraction = fraction.unwrap_or(0.0).clamp(0.0, 1.0);
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        fraction * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::pacing::budget_pacing;
    use crate::models::{BudgetPolicy, Goal, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 21).unwrap()
    }

    #[test]
    fn test_dashboard_shows_balances() {
        let mut book = AccountBook::new();
        book.total_balance = Money::from_cents(100000);
        book.savings = Money::from_cents(25000);

        let pacing = budget_pacing(&book, today());
        let out = format_dashboard(&book, &pacing);

        assert!(out.contains("Total Balance:   $1000.00"));
        assert!(out.contains("Usable Balance:  $750.00"));
        assert!(out.contains("Savings:         $250.00"));
        assert!(out.contains("No budget set"));
        assert!(out.contains("No goals yet"));
    }

    #[test]
    fn test_dashboard_monthly_budget_lines() {
        let mut book = AccountBook::new();
        book.budget = BudgetPolicy::new(BudgetPeriod::Monthly, Money::from_cents(300000));
        book.transactions.push(Transaction::with_details(
            TransactionKind::Outflow,
            Money::from_cents(210000),
            NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
            "Store",
            "",
            "Food",
            false,
        ));

        let pacing = budget_pacing(&book, today());
        let out = format_dashboard(&book, &pacing);

        assert!(out.contains("Monthly spending"));
        assert!(out.contains("$2100.00 of $3000.00"));
        assert!(out.contains("~$90.00"));
    }

    #[test]
    fn test_dashboard_goal_progress() {
        let mut book = AccountBook::new();
        let mut goal = Goal::new("Trip", Money::from_cents(100000));
        goal.fund(Money::from_cents(50000));
        book.goals.push(goal);

        let pacing = budget_pacing(&book, today());
        let out = format_dashboard(&book, &pacing);
        assert!(out.contains("Trip"));
        assert!(out.contains("$500.00 / $1000.00"));
        assert!(out.contains("50%"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert!(progress_bar(Some(0.0)).contains("0%"));
        assert!(progress_bar(Some(1.0)).contains("100%"));
        assert!(progress_bar(None).contains("0%"));
        // Over-limit fractions are clamped
        assert!(progress_bar(Some(3.0)).contains("100%"));
    }
}
