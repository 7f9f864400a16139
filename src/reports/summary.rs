//! Financial summary
//!
//! Headline numbers for the whole ledger.

use crate::ledger::FinanceLedger;
use crate::models::Money;

/// Totals across all transactions
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_savings: Money,
    pub current_balance: Money,
    /// Savings as a percentage of income
    pub savings_rate: f64,
    pub transaction_count: usize,
    pub budget_count: usize,
}

impl FinancialSummary {
    pub fn generate(ledger: &FinanceLedger) -> Self {
        let total_income = ledger.total_income();
        let total_expenses = ledger.total_expenses();

        Self {
            total_income,
            total_expenses,
            total_savings: ledger.total_savings(),
            current_balance: ledger.current_balance(),
            savings_rate: savings_rate(total_income, total_expenses),
            transaction_count: ledger.transactions().len(),
            budget_count: ledger.budgets().len(),
        }
    }
}

/// `(income - expenses) / income * 100`, or 0 when there is no income
pub fn savings_rate(income: Money, expenses: Money) -> f64 {
    if !income.is_positive() {
        return 0.0;
    }
    (income - expenses).cents() as f64 / income.cents() as f64 * 100.0
}
