//! Terminal display formatting
//!
//! Read-only rendering of the aggregate and report data. Nothing here
//! mutates state.

pub mod dashboard;
pub mod report;
pub mod transaction;

pub use dashboard::format_dashboard;
pub use report::{format_monthly_report, format_spending_report};
pub use transaction::{format_transaction_details, format_transaction_table};
