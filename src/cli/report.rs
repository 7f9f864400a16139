//! Report CLI commands

use clap::Subcommand;

use crate::display::{format_spending_report, format_summary, format_trend_report};
use crate::error::FintrackResult;
use crate::reports::{FinancialSummary, SpendingReport, TrendReport};
use crate::services::LedgerSession;
use crate::storage::KeyValueStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses, savings and balance
    Summary,

    /// Expense breakdown by category
    Categories,

    /// Income and expenses per month
    Trend {
        /// Only show the most recent N months
        #[arg(short, long)]
        months: Option<usize>,
    },
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    session: &LedgerSession<S>,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    let ledger = session.ledger();
    let currency = ledger.preferences().currency;

    match cmd {
        ReportCommands::Summary => {
            print!("{}", format_summary(&FinancialSummary::generate(ledger), currency));
        }
        ReportCommands::Categories => {
            print!(
                "{}",
                format_spending_report(&SpendingReport::generate(ledger), currency)
            );
        }
        ReportCommands::Trend { months } => {
            print!(
                "{}",
                format_trend_report(&TrendReport::generate(ledger, months), currency)
            );
        }
    }

    Ok(())
}
