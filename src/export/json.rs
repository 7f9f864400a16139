//! JSON Export functionality
//!
//! The export document is `{ "transactions": [...] }`, pretty-printed.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

/// Default file name for exports
pub const DEFAULT_EXPORT_FILE: &str = "fintrack-data.json";

/// The exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionExport {
    pub transactions: Vec<Transaction>,
}

impl TransactionExport {
    pub fn new(transactions: &[Transaction]) -> Self {
        Self {
            transactions: transactions.to_vec(),
        }
    }

    /// Validate every transaction in the document
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| format!("Transaction {}: {}", txn.id, e))?;
            if !seen.insert(&txn.id) {
                return Err(format!("Duplicate transaction id: {}", txn.id));
            }
        }
        Ok(())
    }
}

/// Write transactions as a pretty JSON export document
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FintrackResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &TransactionExport::new(transactions))
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
    Ok(())
}

/// Parse a JSON export document back into its transactions
pub fn import_transactions_json(json_str: &str) -> FintrackResult<Vec<Transaction>> {
    let export: TransactionExport = serde_json::from_str(json_str)
        .map_err(|e| FintrackError::Import(format!("Invalid export document: {}", e)))?;
    export.validate().map_err(FintrackError::Import)?;
    Ok(export.transactions)
}
