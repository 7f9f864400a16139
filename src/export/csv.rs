//! CSV Export functionality
//!
//! One row per transaction, in ledger order.

use serde::Serialize;
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Notes")]
    notes: &'a str,
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FintrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in transactions {
        csv_writer
            .serialize(CsvRow {
                id: txn.id.as_str(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                kind: txn.kind.to_string(),
                category: &txn.category,
                description: &txn.description,
                amount: format!("{}.{:02}", txn.amount.units(), txn.amount.cents_part()),
                notes: txn.notes.as_deref().unwrap_or(""),
            })
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}
