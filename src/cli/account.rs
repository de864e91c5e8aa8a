//! Savings and balance CLI commands

use clap::Subcommand;

use crate::audit::{AuditEntry, EntityType};
use crate::error::FintrackResult;
use crate::ledger::Ledger;

use super::{parse_money, AppContext};

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Move part of the balance into savings
    Add {
        /// Amount to set aside
        amount: String,
    },

    /// Show the savings pool
    Show,
}

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Directly override the total balance (setup/correction)
    Set {
        /// New balance (may be negative)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show balance breakdown
    Show,
}

/// Handle a savings command
pub fn handle_savings_command(ctx: &AppContext, cmd: SavingsCommands) -> FintrackResult<()> {
    let mut book = ctx.load_book()?;

    match cmd {
        SavingsCommands::Add { amount } => {
            let amount = parse_money(&amount)?;
            let before = book.savings;

            let after = Ledger::new(&mut book).add_to_savings(amount)?;
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::update(
                &ctx.profile,
                EntityType::Savings,
                "",
                &before,
                &after,
                Some(format!("savings: {} -> {}", before, after)),
            ))?;

            println!(
                "Savings are now {}",
                after.format_with_symbol(&book.currency)
            );
            println!(
                "Balance is now {}",
                book.total_balance.format_with_symbol(&book.currency)
            );
        }

        SavingsCommands::Show => {
            println!(
                "Savings: {}",
                book.savings.format_with_symbol(&book.currency)
            );
        }
    }

    Ok(())
}

/// Handle a balance command
pub fn handle_balance_command(ctx: &AppContext, cmd: BalanceCommands) -> FintrackResult<()> {
    let mut book = ctx.load_book()?;

    match cmd {
        BalanceCommands::Set { amount } => {
            let new_value = parse_money(&amount)?;
            let previous = Ledger::new(&mut book).edit_balance(new_value);
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::update(
                &ctx.profile,
                EntityType::Balance,
                "",
                &previous,
                &new_value,
                Some(format!("balance: {} -> {}", previous, new_value)),
            ))?;

            println!(
                "Balance set to {}",
                new_value.format_with_symbol(&book.currency)
            );
        }

        BalanceCommands::Show => {
            let currency = &book.currency;
            println!(
                "Total balance:  {}",
                book.total_balance.format_with_symbol(currency)
            );
            println!(
                "Savings:        {}",
                book.savings.format_with_symbol(currency)
            );
            println!(
                "Goal funding:   {}",
                book.goals_total().format_with_symbol(currency)
            );
            println!(
                "Usable balance: {}",
                book.usable_balance().format_with_symbol(currency)
            );
        }
    }

    Ok(())
}
