//! Dashboard CLI command

use crate::display::format_dashboard;
use crate::error::FintrackResult;
use crate::ledger::budget_pacing;

use super::AppContext;

/// Render the account overview for the active profile
pub fn handle_dashboard_command(ctx: &AppContext) -> FintrackResult<()> {
    let book = ctx.load_book()?;
    let today = chrono::Local::now().date_naive();
    let pacing = budget_pacing(&book, today);

    println!("Profile: {}", ctx.profile);
    println!();
    print!("{}", format_dashboard(&book, &pacing));

    Ok(())
}
