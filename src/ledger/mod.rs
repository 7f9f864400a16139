//! Finance ledger
//!
//! The in-memory store of transactions and budgets, the snapshot type handed
//! to persistence, and the starter dataset.

pub mod finance;
pub mod seed;
pub mod state;

pub use finance::FinanceLedger;
pub use seed::default_state;
pub use state::LedgerState;
