//! Service layer for FinTrack
//!
//! The service layer sits between callers and the ledger: sessions that keep
//! the ledger persisted, and query helpers over its transactions.

pub mod filter;
pub mod session;

pub use filter::{DateWindow, TransactionFilter};
pub use session::LedgerSession;
