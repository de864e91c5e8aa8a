//! Read-only reports over the account aggregate

pub mod monthly;
pub mod spending;

pub use monthly::{MonthSummary, MonthlyReport};
pub use spending::{CategorySpending, SpendingReport};
