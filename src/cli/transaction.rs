//! Transaction CLI commands
//!
//! Implements CLI commands for adding, editing, deleting and listing
//! transactions.

use clap::Subcommand;

use crate::audit::{AuditEntry, EntityType};
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{FintrackError, FintrackResult};
use crate::ledger::{Ledger, TransactionDraft, TransactionFilter};
use crate::models::{AccountBook, Transaction, TransactionId, TransactionKind};

use super::{parse_date, parse_money, AppContext};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "450" or "450.00")
        amount: String,
        /// Transaction kind: debit/outflow or credit/inflow
        #[arg(short, long, default_value = "outflow")]
        kind: String,
        /// Transaction date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Merchant or source name
        #[arg(short, long)]
        merchant: Option<String>,
        /// Free-text description
        #[arg(long)]
        description: Option<String>,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Exclude this outflow from budget metrics
        #[arg(long)]
        exclude_from_budget: bool,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID (full or unique prefix)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New kind
        #[arg(short, long)]
        kind: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New merchant
        #[arg(short, long)]
        merchant: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// Set the budget-exemption flag
        #[arg(long)]
        exclude_from_budget: Option<bool>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (full or unique prefix)
        id: String,
    },

    /// Show transaction details
    Show {
        /// Transaction ID (full or unique prefix)
        id: String,
    },

    /// List transactions
    List {
        /// Search term over merchant and description
        #[arg(short, long)]
        search: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by kind
        #[arg(short, long)]
        kind: Option<String>,
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Hide budget-exempt outflows
        #[arg(long)]
        hide_exempt: bool,
        /// Maximum number of rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Resolve a transaction by full ID or unique display prefix
pub(crate) fn resolve_transaction(
    book: &AccountBook,
    identifier: &str,
) -> FintrackResult<Transaction> {
    if let Ok(id) = identifier.parse::<TransactionId>() {
        if let Some(txn) = book.transaction(id) {
            return Ok(txn.clone());
        }
    }

    let needle = identifier.strip_prefix("txn-").unwrap_or(identifier);
    let matches: Vec<&Transaction> = book
        .transactions
        .iter()
        .filter(|t| t.id.as_uuid().to_string().starts_with(needle))
        .collect();

    match matches.len() {
        1 => Ok(matches[0].clone()),
        0 => Err(FintrackError::transaction_not_found(identifier.to_string())),
        _ => Err(FintrackError::Validation(format!(
            "Transaction ID prefix '{}' is ambiguous ({} matches)",
            identifier,
            matches.len()
        ))),
    }
}

fn parse_kind(s: &str) -> FintrackResult<TransactionKind> {
    TransactionKind::parse(s)
        .ok_or_else(|| FintrackError::Validation(format!("Unknown transaction kind: '{}'", s)))
}

/// Summarize the differences between two versions of a transaction
fn diff_summary(before: &Transaction, after: &Transaction) -> Option<String> {
    let mut changes = Vec::new();
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.kind != after.kind {
        changes.push(format!("kind: {} -> {}", before.kind, after.kind));
    }
    if before.merchant != after.merchant {
        changes.push(format!(
            "merchant: '{}' -> '{}'",
            before.merchant, after.merchant
        ));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: '{}' -> '{}'",
            before.category, after.category
        ));
    }
    if before.description != after.description {
        changes.push("description changed".to_string());
    }
    if before.exclude_from_budget != after.exclude_from_budget {
        changes.push(format!(
            "exclude_from_budget: {} -> {}",
            before.exclude_from_budget, after.exclude_from_budget
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(ctx: &AppContext, cmd: TransactionCommands) -> FintrackResult<()> {
    let mut book = ctx.load_book()?;

    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            date,
            merchant,
            description,
            category,
            exclude_from_budget,
        } => {
            let date = match date {
                Some(s) => parse_date(&s, &ctx.settings.date_format)?,
                None => chrono::Local::now().date_naive(),
            };

            let draft = TransactionDraft {
                kind: parse_kind(&kind)?,
                amount: parse_money(&amount)?,
                date,
                merchant: merchant.unwrap_or_default(),
                description: description.unwrap_or_default(),
                category: category.unwrap_or_default(),
                exclude_from_budget,
            };

            let txn = Ledger::new(&mut book).add_transaction(draft)?;
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::create(
                &ctx.profile,
                EntityType::Transaction,
                txn.id.to_string(),
                &txn,
            ))?;

            println!("Added transaction {}", txn.id);
            println!("  {} {} on {}", txn.kind, txn.amount, txn.date);
            println!(
                "  Balance is now {}",
                book.total_balance.format_with_symbol(&book.currency)
            );
        }

        TransactionCommands::Edit {
            id,
            amount,
            kind,
            date,
            merchant,
            description,
            category,
            exclude_from_budget,
        } => {
            let before = resolve_transaction(&book, &id)?;

            // Merge: fields not given keep their current values
            let draft = TransactionDraft {
                kind: match kind {
                    Some(s) => parse_kind(&s)?,
                    None => before.kind,
                },
                amount: match amount {
                    Some(s) => parse_money(&s)?,
                    None => before.amount,
                },
                date: match date {
                    Some(s) => parse_date(&s, &ctx.settings.date_format)?,
                    None => before.date,
                },
                merchant: merchant.unwrap_or_else(|| before.merchant.clone()),
                description: description.unwrap_or_else(|| before.description.clone()),
                category: category.unwrap_or_else(|| before.category.clone()),
                exclude_from_budget: exclude_from_budget.unwrap_or(before.exclude_from_budget),
            };

            let after = Ledger::new(&mut book).edit_transaction(before.id, draft)?;
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::update(
                &ctx.profile,
                EntityType::Transaction,
                after.id.to_string(),
                &before,
                &after,
                diff_summary(&before, &after),
            ))?;

            println!("Updated transaction {}", after.id);
            println!(
                "  Balance is now {}",
                book.total_balance.format_with_symbol(&book.currency)
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = resolve_transaction(&book, &id)?;
            let deleted = Ledger::new(&mut book).delete_transaction(txn.id)?;
            ctx.save_book(&book)?;
            ctx.audit.log(&AuditEntry::delete(
                &ctx.profile,
                EntityType::Transaction,
                deleted.id.to_string(),
                &deleted,
            ))?;

            println!("Deleted transaction {}", deleted.id);
            println!(
                "  Balance is now {}",
                book.total_balance.format_with_symbol(&book.currency)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = resolve_transaction(&book, &id)?;
            print!("{}", format_transaction_details(&txn, &book.currency));
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            from,
            to,
            hide_exempt,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(term) = search {
                filter = filter.search(term);
            }
            if let Some(cat) = category {
                filter = filter.category(cat);
            }
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            let start = from
                .map(|s| parse_date(&s, &ctx.settings.date_format))
                .transpose()?;
            let end = to
                .map(|s| parse_date(&s, &ctx.settings.date_format))
                .transpose()?;
            filter = filter.date_range(start, end);
            if hide_exempt {
                filter = filter.hide_budget_exempt();
            }

            let mut transactions = filter.apply(&book.transactions);
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_table(&transactions, &book.currency));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn book_with_txn() -> (AccountBook, Transaction) {
        let mut book = AccountBook::new();
        let draft = TransactionDraft {
            kind: TransactionKind::Outflow,
            amount: Money::from_cents(5000),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            merchant: "Store".to_string(),
            description: String::new(),
            category: "Food".to_string(),
            exclude_from_budget: false,
        };
        let txn = Ledger::new(&mut book).add_transaction(draft).unwrap();
        (book, txn)
    }

    #[test]
    fn test_resolve_by_full_uuid() {
        let (book, txn) = book_with_txn();
        let resolved = resolve_transaction(&book, &txn.id.as_uuid().to_string()).unwrap();
        assert_eq!(resolved.id, txn.id);
    }

    #[test]
    fn test_resolve_by_display_prefix() {
        let (book, txn) = book_with_txn();
        // The display form is "txn-" + first 8 uuid chars
        let resolved = resolve_transaction(&book, &txn.id.to_string()).unwrap();
        assert_eq!(resolved.id, txn.id);
    }

    #[test]
    fn test_resolve_unknown_id() {
        let (book, _txn) = book_with_txn();
        let err = resolve_transaction(&book, "txn-ffffffff").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_diff_summary_lists_changes() {
        let (_book, txn) = book_with_txn();
        let mut after = txn.clone();
        after.amount = Money::from_cents(7000);
        after.category = "Dining".to_string();

        let summary = diff_summary(&txn, &after).unwrap();
        assert!(summary.contains("amount: 50.00 -> 70.00"));
        assert!(summary.contains("category: 'Food' -> 'Dining'"));
    }

    #[test]
    fn test_diff_summary_empty_for_identical() {
        let (_book, txn) = book_with_txn();
        assert!(diff_summary(&txn, &txn.clone()).is_none());
    }
}
