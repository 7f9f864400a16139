//! Starter dataset used when no persisted state exists

use chrono::NaiveDate;

use super::state::LedgerState;
use crate::models::{
    Budget, Currency, Money, Theme, Transaction, TransactionId, TransactionKind,
};

fn starter(
    id: &str,
    amount: i64,
    category: &str,
    kind: TransactionKind,
    description: &str,
    day: u32,
) -> Transaction {
    Transaction {
        id: TransactionId::from(id),
        amount: Money::from_major_units(amount),
        category: category.to_string(),
        kind,
        description: description.to_string(),
        // December 2024 always has these days
        date: NaiveDate::from_ymd_opt(2024, 12, day).unwrap_or(NaiveDate::MIN),
        notes: None,
    }
}

/// The illustrative transactions and budgets a brand-new ledger starts with
pub fn default_state() -> LedgerState {
    use TransactionKind::{Expense, Income};

    LedgerState {
        transactions: vec![
            starter("1", 5000, "Salary", Income, "Monthly Salary", 1),
            starter("2", 1200, "Rent", Expense, "Apartment Rent", 2),
            starter("3", 450, "Food", Expense, "Groceries", 5),
            starter("4", 200, "Shopping", Expense, "Clothes", 10),
            starter("5", 150, "Bills", Expense, "Electricity Bill", 12),
        ],
        budgets: vec![
            Budget::with_spent("Food", Money::from_major_units(500), Money::from_major_units(450)),
            Budget::with_spent(
                "Shopping",
                Money::from_major_units(300),
                Money::from_major_units(200),
            ),
            Budget::with_spent("Bills", Money::from_major_units(200), Money::from_major_units(150)),
            Budget::new("Travel", Money::from_major_units(400)),
        ],
        currency: Currency::Usd,
        theme: Theme::Dark,
    }
}
