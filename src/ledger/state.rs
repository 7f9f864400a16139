//! Serializable ledger state
//!
//! This is the shape handed to the persistence collaborator: the full
//! transaction list, the budget list and the user's preferences.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, Currency, Theme, Transaction};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerState {
    /// Most recent first
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub theme: Theme,
}
