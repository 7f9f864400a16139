//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, editing and deleting
//! transactions.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::{FintrackError, FintrackResult};
use crate::ledger::FinanceLedger;
use crate::models::{Money, TransactionId, TransactionInput, TransactionKind, TransactionPatch};
use crate::services::{DateWindow, LedgerSession, TransactionFilter};
use crate::storage::KeyValueStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "50", "19.99" or "1,200.00")
        amount: String,
        /// Category name
        category: String,
        /// Short description
        description: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionKind,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions, most recent first
    List {
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type: income or expense
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionKind>,
        /// Date window: all, week, month or year
        #[arg(short, long, default_value = "all")]
        window: DateWindow,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (or a unique prefix of it)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or a unique prefix of it)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type: income or expense
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionKind>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New notes
        #[arg(short, long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        /// Remove the notes
        #[arg(long)]
        clear_notes: bool,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or a unique prefix of it)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    session: &mut LedgerSession<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let currency = session.ledger().preferences().currency;

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            description,
            kind,
            date,
            notes,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => parse_date(&date_str, settings)?,
                None => Local::now().date_naive(),
            };

            let mut input = TransactionInput::new(amount, category, kind, description, date);
            if let Some(notes) = notes {
                input = input.with_notes(notes);
            }

            let txn = session.add_transaction(input)?;
            println!("Added transaction: {}", txn);
            println!("  ID: {}", txn.id);

            if txn.is_expense() {
                if let Some(budget) = session.ledger().budget(&txn.category) {
                    println!(
                        "  Budget '{}': {} of {} spent",
                        budget.category,
                        budget.spent().format_with_symbol(currency.symbol()),
                        budget.limit.format_with_symbol(currency.symbol())
                    );
                }
            }
        }

        TransactionCommands::List {
            category,
            kind,
            window,
            limit,
        } => {
            let mut filter = TransactionFilter::new().window(window).limit(limit);
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }

            let today = Local::now().date_naive();
            let ledger = session.ledger();
            let matching = filter.apply(ledger.transactions(), today);

            print!(
                "{}",
                format_transaction_table(&matching, currency, &settings.date_format)
            );
            println!(
                "Showing {} of {} transaction(s)",
                matching.len(),
                ledger.transactions().len()
            );
        }

        TransactionCommands::Show { id } => {
            let ledger = session.ledger();
            let id = resolve_transaction_id(ledger, &id)?;
            let txn = ledger
                .transaction(&id)
                .ok_or_else(|| FintrackError::transaction_not_found(id.as_str()))?;
            print!("{}", format_transaction_details(txn, currency));
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            kind,
            description,
            date,
            notes,
            clear_notes,
        } => {
            let id = resolve_transaction_id(session.ledger(), &id)?;

            let mut patch = TransactionPatch::new();
            if let Some(amount) = amount {
                patch = patch.amount(parse_amount(&amount)?);
            }
            if let Some(category) = category {
                patch = patch.category(category);
            }
            if let Some(kind) = kind {
                patch = patch.kind(kind);
            }
            if let Some(description) = description {
                patch = patch.description(description);
            }
            if let Some(date_str) = date {
                patch = patch.date(parse_date(&date_str, settings)?);
            }
            if clear_notes {
                patch = patch.notes(None);
            } else if let Some(notes) = notes {
                patch = patch.notes(Some(notes));
            }

            if patch.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let txn = session.update_transaction(&id, patch)?;
            println!("Updated transaction: {}", txn);
        }

        TransactionCommands::Delete { id } => {
            let id = resolve_transaction_id(session.ledger(), &id)?;
            let txn = session.delete_transaction(&id)?;
            println!("Deleted transaction: {}", txn);
        }
    }

    Ok(())
}

/// Parse a user-supplied amount
pub(crate) fn parse_amount(amount: &str) -> FintrackResult<Money> {
    Money::parse(amount).map_err(|e| {
        FintrackError::InvalidInput(format!(
            "Invalid amount format: '{}'. Use format like '50' or '19.99'. Error: {}",
            amount, e
        ))
    })
}

/// Parse a date in the configured format, falling back to YYYY-MM-DD
pub(crate) fn parse_date(date_str: &str, settings: &Settings) -> FintrackResult<NaiveDate> {
    let date_str = date_str.trim();
    NaiveDate::parse_from_str(date_str, &settings.date_format)
        .or_else(|_| NaiveDate::parse_from_str(date_str, "%Y-%m-%d"))
        .map_err(|_| {
            FintrackError::InvalidInput(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        })
}

/// Resolve a full ID or a unique ID prefix to a transaction ID
pub(crate) fn resolve_transaction_id(
    ledger: &FinanceLedger,
    identifier: &str,
) -> FintrackResult<TransactionId> {
    let identifier = identifier.trim();
    let exact = TransactionId::from(identifier);
    if ledger.transaction(&exact).is_some() {
        return Ok(exact);
    }

    let mut matches = ledger
        .transactions()
        .iter()
        .filter(|t| !identifier.is_empty() && t.id.as_str().starts_with(identifier));

    match (matches.next(), matches.next()) {
        (Some(txn), None) => Ok(txn.id.clone()),
        (Some(_), Some(_)) => Err(FintrackError::InvalidInput(format!(
            "Transaction ID prefix '{}' is ambiguous",
            identifier
        ))),
        (None, _) => Err(FintrackError::transaction_not_found(identifier)),
    }
}
