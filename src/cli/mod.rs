//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger engine: each handler loads
//! the profile's aggregate, runs engine operations on it, persists the result
//! and appends audit entries. The engine itself never touches disk.

pub mod account;
pub mod audit;
pub mod budget;
pub mod dashboard;
pub mod export;
pub mod goal;
pub mod import;
pub mod profile;
pub mod report;
pub mod transaction;

pub use account::{handle_balance_command, handle_savings_command, BalanceCommands, SavingsCommands};
pub use audit::handle_audit_command;
pub use dashboard::handle_dashboard_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use export::handle_export_command;
pub use goal::{handle_goal_command, GoalCommands};
pub use import::handle_import_command;
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::audit::AuditLogger;
use crate::config::{FintrackPaths, Settings};
use crate::error::FintrackResult;
use crate::models::AccountBook;
use crate::storage::ProfileStore;

/// Shared state for all command handlers
pub struct AppContext {
    /// Active profile name
    pub profile: String,
    /// Loaded user settings
    pub settings: Settings,
    /// Profile persistence
    pub store: ProfileStore,
    /// Audit log sink
    pub audit: AuditLogger,
    /// Resolved paths
    pub paths: FintrackPaths,
}

impl AppContext {
    /// Build the context, resolving the active profile
    ///
    /// Precedence: `--profile` flag, then the settings default, then
    /// "default".
    pub fn new(profile_override: Option<String>) -> FintrackResult<Self> {
        let paths = FintrackPaths::new()?;
        Self::with_paths(paths, profile_override)
    }

    /// Build the context over explicit paths (used by tests)
    pub fn with_paths(
        paths: FintrackPaths,
        profile_override: Option<String>,
    ) -> FintrackResult<Self> {
        let settings = Settings::load_or_create(&paths)?;

        let profile = profile_override
            .or_else(|| settings.default_profile.clone())
            .unwrap_or_else(|| "default".to_string());
        ProfileStore::validate_name(&profile)?;

        let audit = AuditLogger::new(paths.audit_log());
        let store = ProfileStore::new(paths.clone())?;

        Ok(Self {
            profile,
            settings,
            store,
            audit,
            paths,
        })
    }

    /// Load the active profile's aggregate, creating it on first use
    ///
    /// A fresh profile picks up the currency symbol from the settings.
    pub fn load_book(&self) -> FintrackResult<AccountBook> {
        if self.store.exists(&self.profile) {
            self.store.load(&self.profile)
        } else {
            let mut book = AccountBook::new();
            book.currency = self.settings.currency_symbol.clone();
            self.store.save(&self.profile, &book)?;
            Ok(book)
        }
    }

    /// Persist the active profile's aggregate
    pub fn save_book(&self, book: &AccountBook) -> FintrackResult<()> {
        self.store.save(&self.profile, book)
    }
}

/// Parse a money amount from a CLI argument
pub(crate) fn parse_money(s: &str) -> FintrackResult<crate::models::Money> {
    crate::models::Money::parse(s)
        .map_err(|e| crate::error::FintrackError::Validation(e.to_string()))
}

/// Parse a date from a CLI argument using the settings date format, falling
/// back to ISO
pub(crate) fn parse_date(s: &str, format: &str) -> FintrackResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, format)
        .or_else(|_| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| {
            crate::error::FintrackError::Validation(format!("Could not parse date: '{}'", s))
        })
}
