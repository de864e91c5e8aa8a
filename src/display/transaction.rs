//! Transaction display formatting
//!
//! Renders the transaction register and single-transaction details for the
//! terminal.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Merchant")]
    merchant: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of transactions as a register table
pub fn format_transaction_table(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<RegisterRow> = transactions
        .iter()
        .map(|txn| RegisterRow {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            merchant: truncate(txn.merchant_or_description(), 24),
            category: if txn.category.is_empty() {
                "(uncategorized)".to_string()
            } else {
                txn.category.clone()
            },
            amount: txn.signed_effect().format_with_symbol(currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format full details for one transaction
pub fn format_transaction_details(txn: &Transaction, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Kind:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency)
    ));

    if !txn.merchant.is_empty() {
        output.push_str(&format!("Merchant:    {}\n", txn.merchant));
    }

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    if txn.category.is_empty() {
        output.push_str("Category:    (uncategorized)\n");
    } else {
        output.push_str(&format!("Category:    {}\n", txn.category));
    }

    if txn.exclude_from_budget {
        output.push_str("Budget:      excluded\n");
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
