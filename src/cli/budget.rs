//! Budget CLI commands
//!
//! Implements CLI commands for setting category limits, reviewing budget
//! usage and reconciling a budget's spent amount with its transactions.

use clap::Subcommand;

use super::transaction::parse_amount;
use crate::config::Settings;
use crate::display::format_budget_overview;
use crate::error::{FintrackError, FintrackResult};
use crate::reports::BudgetOverview;
use crate::services::LedgerSession;
use crate::storage::KeyValueStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget or change its limit
    Set {
        /// Category name
        category: String,
        /// Spending limit (e.g., "500" or "500.00")
        limit: String,
    },

    /// Show every budget with its usage and status
    #[command(alias = "ls")]
    List,

    /// Recompute a budget's spent amount from its expense transactions
    Recalc {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    session: &mut LedgerSession<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    let currency = session.ledger().preferences().currency;

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = parse_amount(&limit)?;
            let existed = session.ledger().budget(category.trim()).is_some();

            session.set_budget(&category, limit)?;

            let budget = session
                .ledger()
                .budget(category.trim())
                .ok_or_else(|| FintrackError::budget_not_found(category.trim()))?;
            let verb = if existed { "Updated" } else { "Created" };
            println!(
                "{} budget '{}': limit {}, spent {}",
                verb,
                budget.category,
                budget.limit.format_with_symbol(currency.symbol()),
                budget.spent().format_with_symbol(currency.symbol())
            );

            if !existed {
                let recorded = session.ledger().expenses_for_category(&budget.category);
                if recorded.is_positive() {
                    println!(
                        "Note: {} of existing expenses in this category are not counted. \
                         Run 'fintrack budget recalc {}' to include them.",
                        recorded.format_with_symbol(currency.symbol()),
                        budget.category
                    );
                }
            }
        }

        BudgetCommands::List => {
            let overview = BudgetOverview::generate(session.ledger(), settings.near_limit_percent);
            print!("{}", format_budget_overview(&overview, currency));
        }

        BudgetCommands::Recalc { category } => {
            let before = session
                .ledger()
                .budget(category.trim())
                .map(|b| b.spent())
                .ok_or_else(|| FintrackError::budget_not_found(category.trim()))?;

            let spent = session.recalculate_budget(category.trim())?;
            if spent == before {
                println!(
                    "Budget '{}' is already consistent ({} spent)",
                    category.trim(),
                    spent.format_with_symbol(currency.symbol())
                );
            } else {
                println!(
                    "Budget '{}': spent {} -> {}",
                    category.trim(),
                    before.format_with_symbol(currency.symbol()),
                    spent.format_with_symbol(currency.symbol())
                );
            }
        }
    }

    Ok(())
}
