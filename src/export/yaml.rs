//! YAML Export functionality
//!
//! Same document as the JSON export, for human-readable backups.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::export::json::TransactionExport;
use crate::models::Transaction;

/// Export transactions to YAML format
pub fn export_transactions_yaml<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FintrackResult<()> {
    writeln!(writer, "# FinTrack transaction export")
        .and_then(|_| writeln!(writer, "# Transactions: {}", transactions.len()))
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &TransactionExport::new(transactions))
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

/// Parse a YAML export document back into its transactions
pub fn import_transactions_yaml(yaml_str: &str) -> FintrackResult<Vec<Transaction>> {
    let export: TransactionExport = serde_yaml::from_str(yaml_str)
        .map_err(|e| FintrackError::Import(format!("Invalid export document: {}", e)))?;
    export.validate().map_err(FintrackError::Import)?;
    Ok(export.transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::FinanceLedger;

    #[test]
    fn test_yaml_round_trip() {
        let ledger = FinanceLedger::seeded();
        let mut buffer = Vec::new();
        export_transactions_yaml(ledger.transactions(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# FinTrack transaction export"));
        assert!(text.contains("type: expense"));

        let imported = import_transactions_yaml(&text).unwrap();
        assert_eq!(imported, ledger.transactions());
    }
}
