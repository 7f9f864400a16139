use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_export_command, handle_import_command, handle_report_command,
    handle_settings_command, handle_transaction_command, BudgetCommands, ExportFormat,
    ReportCommands, SettingsCommands, TransactionCommands,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::logging::init_tracing;
use fintrack::services::LedgerSession;
use fintrack::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker: transactions, budgets and totals",
    long_about = "FinTrack records income and expense transactions, keeps each \
                  category budget's spent amount in step with its expenses, and \
                  reports totals, savings and spending trends from the command line."
)]
struct Cli {
    /// Directory holding FinTrack's data and settings
    #[arg(long, global = true, env = "FINTRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export transactions to a file
    Export {
        /// Output file path (defaults to the export directory)
        output: Option<PathBuf>,

        /// Export format (guessed from the output extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Import transactions from a JSON or YAML export
    Import {
        /// Path to the export file
        file: PathBuf,
    },

    /// Preferences and settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    paths
        .ensure_directories()
        .context("Failed to prepare the data directory")?;
    let store = FileStore::new(paths.data_dir());
    let mut session = LedgerSession::open(store, settings.storage_key.clone())
        .context("Failed to load the ledger")?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&session, cmd)?;
        }
        Some(Commands::Export { output, format }) => {
            let format = format
                .or_else(|| output.as_deref().and_then(ExportFormat::from_path))
                .unwrap_or(ExportFormat::Json);
            handle_export_command(&session, &paths, &settings, output, format)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&mut session, &file)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut session, &paths, &mut settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("FinTrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Storage key:          {}", settings.storage_key);
            println!("  Near-limit threshold: {}%", settings.near_limit_percent);
            println!("  Date format:          {}", settings.date_format);
        }
        None => {
            println!("FinTrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report summary' for an overview of your finances.");
        }
    }

    Ok(())
}
