//! Report CLI commands

use clap::Subcommand;

use crate::display::{format_monthly_report, format_spending_report};
use crate::error::FintrackResult;
use crate::reports::{MonthlyReport, SpendingReport};

use super::{parse_date, AppContext};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending by category over an optional date range
    Spending {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,
    },

    /// Per-month inflow/outflow summary
    Monthly,
}

/// Handle a report command
pub fn handle_report_command(ctx: &AppContext, cmd: ReportCommands) -> FintrackResult<()> {
    let book = ctx.load_book()?;

    match cmd {
        ReportCommands::Spending { from, to } => {
            let start = from
                .map(|s| parse_date(&s, &ctx.settings.date_format))
                .transpose()?;
            let end = to
                .map(|s| parse_date(&s, &ctx.settings.date_format))
                .transpose()?;

            let report = SpendingReport::generate(&book, start, end);
            print!("{}", format_spending_report(&report, &book.currency));
        }

        ReportCommands::Monthly => {
            let report = MonthlyReport::generate(&book);
            print!("{}", format_monthly_report(&report, &book.currency));
        }
    }

    Ok(())
}
