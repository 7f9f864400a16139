//! Monthly trend
//!
//! Income, expenses and savings per calendar month.

use chrono::Datelike;
use std::collections::BTreeMap;
use std::fmt;

use crate::ledger::FinanceLedger;
use crate::models::Money;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Totals for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotals {
    pub month: YearMonth,
    pub income: Money,
    pub expenses: Money,
    pub savings: Money,
}

/// Month-by-month totals, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub months: Vec<MonthlyTotals>,
}

impl TrendReport {
    /// Build the trend; `last` keeps only the most recent N months that have data
    pub fn generate(ledger: &FinanceLedger, last: Option<usize>) -> Self {
        let mut buckets: BTreeMap<YearMonth, (Money, Money)> = BTreeMap::new();
        for txn in ledger.transactions() {
            let key = YearMonth {
                year: txn.date.year(),
                month: txn.date.month(),
            };
            let entry = buckets.entry(key).or_insert((Money::zero(), Money::zero()));
            if txn.is_income() {
                entry.0 += txn.amount;
            } else {
                entry.1 += txn.amount;
            }
        }

        let mut months: Vec<MonthlyTotals> = buckets
            .into_iter()
            .map(|(month, (income, expenses))| MonthlyTotals {
                month,
                income,
                expenses,
                savings: income - expenses,
            })
            .collect();

        if let Some(last) = last {
            let skip = months.len().saturating_sub(last);
            months.drain(..skip);
        }

        Self { months }
    }
}
