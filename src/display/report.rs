//! Report rendering
//!
//! Formats spending and monthly reports as terminal tables.

use tabled::{settings::Style, Table, Tabled};

use crate::reports::{MonthlyReport, SpendingReport};

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Txns")]
    count: usize,
}

/// Render a spending report
pub fn format_spending_report(report: &SpendingReport, currency: &str) -> String {
    if report.categories.is_empty() {
        return "No spending in the selected period.\n".to_string();
    }

    let rows: Vec<SpendingRow> = report
        .categories
        .iter()
        .map(|row| SpendingRow {
            category: row.category.clone(),
            spent: row.total.format_with_symbol(currency),
            share: format!("{:.1}%", row.share * 100.0),
            count: row.transaction_count,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\n\nTotal spending: {}\nTotal income:   {}\nNet:            {}\n",
        table,
        report.total_spending.format_with_symbol(currency),
        report.total_income.format_with_symbol(currency),
        report.net().format_with_symbol(currency),
    )
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Inflow")]
    inflow: String,
    #[tabled(rename = "Outflow")]
    outflow: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Txns")]
    count: usize,
}

/// Render a monthly summary report
pub fn format_monthly_report(report: &MonthlyReport, currency: &str) -> String {
    if report.months.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let rows: Vec<MonthRow> = report
        .months
        .iter()
        .map(|m| MonthRow {
            month: m.label(),
            inflow: m.inflow.format_with_symbol(currency),
            outflow: m.outflow.format_with_symbol(currency),
            net: m.net().format_with_symbol(currency),
            count: m.transaction_count,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountBook, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn sample_book() -> AccountBook {
        let mut book = AccountBook::new();
        book.transactions.push(Transaction::with_details(
            TransactionKind::Outflow,
            Money::from_cents(40000),
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            "Store",
            "",
            "Food",
            false,
        ));
        book.transactions.push(Transaction::with_details(
            TransactionKind::Inflow,
            Money::from_cents(500000),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "Acme Corp",
            "",
            "Salary",
            false,
        ));
        book
    }

    #[test]
    fn test_spending_report_rendering() {
        let book = sample_book();
        let report = SpendingReport::generate(&book, None, None);
        let out = format_spending_report(&report, "$");

        assert!(out.contains("Food"));
        assert!(out.contains("$400.00"));
        assert!(out.contains("100.0%"));
        assert!(out.contains("Net:            $4600.00"));
    }

    #[test]
    fn test_empty_spending_report() {
        let report = SpendingReport::generate(&AccountBook::new(), None, None);
        assert!(format_spending_report(&report, "$").contains("No spending"));
    }

    #[test]
    fn test_monthly_report_rendering() {
        let book = sample_book();
        let report = MonthlyReport::generate(&book);
        let out = format_monthly_report(&report, "$");

        assert!(out.contains("2025-01"));
        assert!(out.contains("$5000.00"));
        assert!(out.contains("$400.00"));
    }
}
