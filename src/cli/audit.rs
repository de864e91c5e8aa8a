//! Audit CLI command

use crate::error::FintrackResult;

use super::AppContext;

/// Show the most recent audit entries, newest first
pub fn handle_audit_command(ctx: &AppContext, limit: usize) -> FintrackResult<()> {
    let entries = ctx.audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_line());
    }

    Ok(())
}
