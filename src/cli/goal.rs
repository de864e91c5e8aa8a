//! Goal CLI commands

use clap::Subcommand;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{FintrackError, FintrackResult};
use crate::ledger::Ledger;
use crate::models::{AccountBook, Goal, GoalId};

use super::{parse_money, AppContext};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
    },

    /// Fund a goal from the balance
    Fund {
        /// Goal ID or name
        goal: String,
        /// Amount to move into the goal
        amount: String,
    },

    /// List goals with progress
    List,
}

/// Resolve a goal by ID, display prefix, or case-insensitive name
pub(crate) fn resolve_goal(book: &AccountBook, identifier: &str) -> FintrackResult<Goal> {
    if let Ok(id) = identifier.parse::<GoalId>() {
        if let Some(goal) = book.goal(id) {
            return Ok(goal.clone());
        }
    }

    let needle = identifier.strip_prefix("goal-").unwrap_or(identifier);
    let matches: Vec<&Goal> = book
        .goals
        .iter()
        .filter(|g| {
            g.name.eq_ignore_ascii_case(identifier)
                || g.id.as_uuid().to_string().starts_with(needle)
        })
        .collect();

    match matches.len() {
        1 => Ok(matches[0].clone()),
        0 => Err(FintrackError::goal_not_found(identifier.to_string())),
        _ => Err(FintrackError::Validation(format!(
            "Goal '{}' is ambiguous ({} matches)",
            identifier,
            matches.len()
        ))),
    }
}

/// Handle a goal command
pub fn handle_goal_command(ctx: &AppContext, cmd: GoalCommands) -> FintrackResult<()> {
    let mut book = ctx.load_book()?;

    match cmd {
        GoalCommands::Add { name, target } => {
            let target = parse_money(&target)?;
            let goal = Ledger::new(&mut book).add_goal(&name, target)?;
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::create(
                &ctx.profile,
                EntityType::Goal,
                goal.id.to_string(),
                &goal,
            ))?;

            println!("Added goal '{}' ({})", goal.name, goal.id);
            println!(
                "  Target: {}",
                goal.target_amount.format_with_symbol(&book.currency)
            );
        }

        GoalCommands::Fund { goal, amount } => {
            let amount = parse_money(&amount)?;
            let before = resolve_goal(&book, &goal)?;

            let after = Ledger::new(&mut book).fund_goal(before.id, amount)?;
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::update(
                &ctx.profile,
                EntityType::Goal,
                after.id.to_string(),
                &before,
                &after,
                Some(format!(
                    "funded {}: {} -> {}",
                    after.name, before.current_amount, after.current_amount
                )),
            ))?;

            println!(
                "Funded '{}' with {}",
                after.name,
                amount.format_with_symbol(&book.currency)
            );
            println!(
                "  Progress: {} / {}",
                after.current_amount.format_with_symbol(&book.currency),
                after.target_amount.format_with_symbol(&book.currency)
            );
            println!(
                "  Balance is now {}",
                book.total_balance.format_with_symbol(&book.currency)
            );
        }

        GoalCommands::List => {
            if book.goals.is_empty() {
                println!("No goals yet.");
            } else {
                for goal in &book.goals {
                    println!(
                        "{} [{}]  {} / {}  ({:.0}%)",
                        goal.name,
                        goal.id,
                        goal.current_amount.format_with_symbol(&book.currency),
                        goal.target_amount.format_with_symbol(&book.currency),
                        goal.progress_fraction() * 100.0
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn book_with_goal(name: &str) -> (AccountBook, Goal) {
        let mut book = AccountBook::new();
        let goal = Ledger::new(&mut book)
            .add_goal(name, Money::from_cents(100000))
            .unwrap();
        (book, goal)
    }

    #[test]
    fn test_resolve_by_name_case_insensitive() {
        let (book, goal) = book_with_goal("Emergency Fund");
        let resolved = resolve_goal(&book, "emergency fund").unwrap();
        assert_eq!(resolved.id, goal.id);
    }

    #[test]
    fn test_resolve_by_display_prefix() {
        let (book, goal) = book_with_goal("Trip");
        let resolved = resolve_goal(&book, &goal.id.to_string()).unwrap();
        assert_eq!(resolved.id, goal.id);
    }

    #[test]
    fn test_resolve_unknown_goal() {
        let (book, _goal) = book_with_goal("Trip");
        assert!(resolve_goal(&book, "Boat").unwrap_err().is_not_found());
    }
}
