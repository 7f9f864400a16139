//! Core data models for FinTrack
//!
//! Transactions, category budgets, money amounts and user preferences.

pub mod budget;
pub mod ids;
pub mod money;
pub mod preferences;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use preferences::{Currency, Preferences, Theme};
pub use transaction::{
    Transaction, TransactionInput, TransactionKind, TransactionPatch, TransactionValidationError,
};
