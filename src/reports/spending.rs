//! Spending Report
//!
//! Expense totals per category, largest first.

use std::collections::HashMap;

use crate::ledger::FinanceLedger;
use crate::models::Money;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of all expenses
    pub percentage: f64,
}

/// Expense breakdown by category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    /// Sorted by total descending, then category name
    pub categories: Vec<CategorySpending>,
    pub total_expenses: Money,
}

impl SpendingReport {
    pub fn generate(ledger: &FinanceLedger) -> Self {
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        for txn in ledger.transactions().iter().filter(|t| t.is_expense()) {
            let entry = by_category
                .entry(txn.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let total_expenses: Money = by_category.values().map(|(total, _)| *total).sum();

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (total, transaction_count))| CategorySpending {
                category: category.to_string(),
                total,
                transaction_count,
                percentage: if total_expenses.is_positive() {
                    total.cents() as f64 / total_expenses.cents() as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            categories,
            total_expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
