//! Budget CLI commands

use clap::Subcommand;

use crate::audit::{AuditEntry, EntityType};
use crate::error::FintrackResult;
use crate::ledger::{budget_pacing, Ledger};
use crate::models::BudgetPeriod;

use super::{parse_money, AppContext};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the active budget policy (replaces the previous one)
    Set {
        /// Budget period: daily or monthly
        period: String,
        /// Spending limit for the period
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Show the active policy and current pacing
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &AppContext, cmd: BudgetCommands) -> FintrackResult<()> {
    let mut book = ctx.load_book()?;

    match cmd {
        BudgetCommands::Set { period, limit } => {
            let period: BudgetPeriod = period
                .parse()
                .map_err(crate::error::FintrackError::Validation)?;
            let limit = parse_money(&limit)?;

            let before = book.budget;
            let after = Ledger::new(&mut book).set_budget(period, limit)?;
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::update(
                &ctx.profile,
                EntityType::Budget,
                "",
                &before,
                &after,
                Some(format!("budget: {} -> {}", before, after)),
            ))?;

            println!("Budget set: {}", after);
        }

        BudgetCommands::Show => {
            let today = chrono::Local::now().date_naive();
            let pacing = budget_pacing(&book, today);
            let currency = &book.currency;

            println!("Policy: {}", book.budget);
            println!(
                "Monthly spending: {}",
                pacing.monthly_spend.format_with_symbol(currency)
            );
            println!(
                "Today's spending: {}",
                pacing.daily_spend.format_with_symbol(currency)
            );
            println!(
                "Daily guideline:  {}",
                pacing.daily_guideline.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}
