//! Budget Overview
//!
//! Per-budget usage with an on-track / near-limit / over-budget status.

use std::fmt;

use crate::ledger::FinanceLedger;
use crate::models::{Budget, Money};

/// Default percentage of the limit at which a budget counts as near its limit
pub const DEFAULT_NEAR_LIMIT_PERCENT: u8 = 80;

/// How a budget is doing against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    OverBudget,
}

impl BudgetStatus {
    /// Classify a usage percentage
    pub fn classify(percent_used: f64, near_limit_percent: u8) -> Self {
        if percent_used >= 100.0 {
            Self::OverBudget
        } else if percent_used >= f64::from(near_limit_percent) {
            Self::NearLimit
        } else {
            Self::OnTrack
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On Track"),
            Self::NearLimit => write!(f, "Near Limit"),
            Self::OverBudget => write!(f, "Over Budget"),
        }
    }
}

/// One row of the overview
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// Negative once overspent
    pub remaining: Money,
    pub percent_used: f64,
    pub status: BudgetStatus,
}

impl BudgetLine {
    pub fn from_budget(budget: &Budget, near_limit_percent: u8) -> Self {
        let percent_used = budget.percent_used();
        // Over budget is decided on cents; the percentage only grades the rest
        let status = if budget.is_over() {
            BudgetStatus::OverBudget
        } else {
            match BudgetStatus::classify(percent_used, near_limit_percent) {
                BudgetStatus::OverBudget => BudgetStatus::NearLimit,
                status => status,
            }
        };
        Self {
            category: budget.category.clone(),
            limit: budget.limit,
            spent: budget.spent(),
            remaining: budget.remaining(),
            percent_used,
            status,
        }
    }
}

/// Status of every budget in the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    /// In ledger order
    pub lines: Vec<BudgetLine>,
    pub total_limit: Money,
    pub total_spent: Money,
}

impl BudgetOverview {
    pub fn generate(ledger: &FinanceLedger, near_limit_percent: u8) -> Self {
        let lines: Vec<BudgetLine> = ledger
            .budgets()
            .iter()
            .map(|b| BudgetLine::from_budget(b, near_limit_percent))
            .collect();

        Self {
            total_limit: lines.iter().map(|l| l.limit).sum(),
            total_spent: lines.iter().map(|l| l.spent).sum(),
            lines,
        }
    }

    /// Budgets that have reached their limit
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetLine> {
        self.lines
            .iter()
            .filter(|l| l.status == BudgetStatus::OverBudget)
    }
}
