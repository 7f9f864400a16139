//! Budget model
//!
//! A per-category monthly spending cap plus the running total spent against
//! it. `spent` is maintained by the ledger and has no public setter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A spending cap for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this budget tracks (unique among budgets)
    pub category: String,

    /// Monthly cap
    pub limit: Money,

    /// Sum of expense amounts recorded against this category
    spent: Money,
}

impl Budget {
    /// Create a fresh budget with nothing spent
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
            spent: Money::zero(),
        }
    }

    /// Create a budget with a known spent total (hydration and starter data)
    pub fn with_spent(category: impl Into<String>, limit: Money, spent: Money) -> Self {
        Self {
            category: category.into(),
            limit,
            spent,
        }
    }

    /// Amount spent so far
    pub fn spent(&self) -> Money {
        self.spent
    }

    /// Amount left before the cap; negative once overspent
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Check if spending has reached or passed the limit
    pub fn is_over(&self) -> bool {
        self.spent.is_positive() && self.spent >= self.limit
    }

    /// Percentage of the limit used. A zero limit counts as fully used once
    /// anything is spent.
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            if self.spent.is_positive() {
                return 100.0;
            }
            return 0.0;
        }
        self.spent.cents() as f64 / self.limit.cents() as f64 * 100.0
    }

    pub(crate) fn add_spent(&mut self, amount: Money) {
        self.spent += amount;
    }

    /// Subtract from spent, flooring at zero. Returns true if the floor was hit.
    pub(crate) fn release_spent(&mut self, amount: Money) -> bool {
        let clamped = amount > self.spent;
        self.spent = self.spent.saturating_sub_floor(amount);
        clamped
    }

    pub(crate) fn reset_spent(&mut self, spent: Money) {
        self.spent = spent;
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit(self.limit));
        }
        if self.spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent(self.spent));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / {}", self.category, self.spent, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeLimit(Money),
    NegativeSpent(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category is required"),
            Self::NegativeLimit(limit) => {
                write!(f, "Budget limit must not be negative (got {})", limit)
            }
            Self::NegativeSpent(spent) => {
                write!(f, "Budget spent must not be negative (got {})", spent)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
