use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_audit_command, handle_balance_command, handle_budget_command, handle_dashboard_command,
    handle_export_command, handle_goal_command, handle_import_command, handle_profile_command,
    handle_report_command, handle_savings_command, handle_transaction_command, AppContext,
    BalanceCommands, BudgetCommands, GoalCommands, ProfileCommands, ReportCommands,
    SavingsCommands, TransactionCommands,
};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "FinTrack keeps a ledger of your inflows and outflows and reconciles \
                  your balance, savings, goals and budget pacing after every change. \
                  Import bank/SMS CSV exports, set a daily or monthly budget, and \
                  track savings goals from the command line."
)]
struct Cli {
    /// Profile to operate on (defaults to the configured default profile)
    #[arg(short, long, global = true, env = "FINTRACK_PROFILE")]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the account overview
    #[command(alias = "dash")]
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "tx")]
    Transaction(TransactionCommands),

    /// Import transactions from a CSV export
    Import {
        /// Path to the CSV file
        file: std::path::PathBuf,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Savings pool commands
    #[command(subcommand)]
    Savings(SavingsCommands),

    /// Balance commands
    #[command(subcommand)]
    Balance(BalanceCommands),

    /// Reports over the ledger
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the profile's data
    Export {
        /// Output format: csv, json, or yaml
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Profile management commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(cli.profile)?;

    match cli.command {
        Commands::Dashboard => handle_dashboard_command(&ctx)?,
        Commands::Transaction(cmd) => handle_transaction_command(&ctx, cmd)?,
        Commands::Import { file } => handle_import_command(&ctx, file)?,
        Commands::Budget(cmd) => handle_budget_command(&ctx, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&ctx, cmd)?,
        Commands::Savings(cmd) => handle_savings_command(&ctx, cmd)?,
        Commands::Balance(cmd) => handle_balance_command(&ctx, cmd)?,
        Commands::Report(cmd) => handle_report_command(&ctx, cmd)?,
        Commands::Export { format, output } => handle_export_command(&ctx, format, output)?,
        Commands::Audit { limit } => handle_audit_command(&ctx, limit)?,
        Commands::Profile(cmd) => handle_profile_command(&ctx, cmd)?,
        Commands::Config => {
            println!("Profile:   {}", ctx.profile);
            println!("Base dir:  {}", ctx.paths.base_dir().display());
            println!("Data dir:  {}", ctx.paths.data_dir().display());
            println!("Audit log: {}", ctx.paths.audit_log().display());
            println!("Currency:  {}", ctx.settings.currency_symbol);
            println!("Dates:     {}", ctx.settings.date_format);
        }
    }

    Ok(())
}
