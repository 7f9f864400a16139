//! Transaction filtering
//!
//! Narrows the ledger's transaction list by category, kind and a date window
//! relative to a reference day. Ledger order (most recent first) is kept.

use chrono::{Duration, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionKind};

/// How far back from the reference date to look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    Week,
    Month,
    Year,
}

impl DateWindow {
    /// Earliest date included in the window, or `None` for no lower bound
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::Week => Some(today - Duration::days(7)),
            Self::Month => Some(today.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN)),
            Self::Year => Some(today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN)),
        }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for DateWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(format!("Unknown date window: {}", other)),
        }
    }
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    pub window: DateWindow,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single transaction against the filter
    pub fn matches(&self, txn: &Transaction, today: NaiveDate) -> bool {
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(start) = self.window.start(today) {
            if txn.date < start || txn.date > today {
                return false;
            }
        }
        true
    }

    /// Apply the filter to a list of transactions
    pub fn apply<'a>(&self, transactions: &'a [Transaction], today: NaiveDate) -> Vec<&'a Transaction> {
        let matching = transactions.iter().filter(|t| self.matches(t, today));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}
