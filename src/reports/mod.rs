//! Reports over the ledger
//!
//! - Summary: totals, savings and savings rate
//! - Spending: expense breakdown by category
//! - Budget overview: usage and status per budget
//! - Trend: income, expenses and savings per month

pub mod budget_overview;
pub mod spending;
pub mod summary;
pub mod trend;

pub use budget_overview::{
    BudgetLine, BudgetOverview, BudgetStatus, DEFAULT_NEAR_LIMIT_PERCENT,
};
pub use spending::{CategorySpending, SpendingReport};
pub use summary::{savings_rate, FinancialSummary};
pub use trend::{MonthlyTotals, TrendReport, YearMonth};
