//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{money, truncate};
use crate::models::{Currency, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Signed amount: expenses are shown as outflows
pub fn format_signed_amount(txn: &Transaction, currency: Currency) -> String {
    if txn.is_expense() {
        money(-txn.amount, currency)
    } else {
        format!("+{}", money(txn.amount, currency))
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[&Transaction],
    currency: Currency,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.short().to_string(),
        date: txn.date.format(date_format).to_string(),
        description: truncate(&txn.description, 30),
        category: truncate(&txn.category, 20),
        amount: format_signed_amount(txn, currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", format_signed_amount(txn, currency)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    if let Some(notes) = txn.notes.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    output
}
