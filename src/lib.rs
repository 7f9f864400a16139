//! FinTrack - personal finance ledger
//!
//! This library provides the core of the FinTrack finance tracker: an
//! in-memory ledger of income and expense transactions plus per-category
//! budgets whose spent amounts follow the expenses recorded against them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, money, preferences)
//! - `ledger`: The finance ledger and its derived totals
//! - `storage`: Key-value persistence of the ledger state
//! - `services`: Persisting sessions and transaction filtering
//! - `reports`: Summary, spending, budget and trend reports
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::services::LedgerSession;
//! use fintrack::storage::MemoryStore;
//!
//! let mut session = LedgerSession::open(MemoryStore::new(), "fintrack-storage")?;
//! println!("{}", session.ledger().current_balance());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
pub use ledger::FinanceLedger;
pub use services::LedgerSession;
