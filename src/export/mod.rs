//! Export module for FinTrack
//!
//! Writes the transaction list in several formats:
//! - JSON: `{ "transactions": [...] }`, the document re-imported by `import`
//! - YAML: the same document, human-readable
//! - CSV: one row per transaction (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{
    export_transactions_json, import_transactions_json, TransactionExport, DEFAULT_EXPORT_FILE,
};
pub use yaml::{export_transactions_yaml, import_transactions_yaml};
