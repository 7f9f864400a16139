//! CLI commands for data export and import
//!
//! Export writes the transaction list as JSON, YAML or CSV. Import reads a
//! JSON or YAML export document and records each transaction as new.

use clap::ValueEnum;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{FintrackPaths, Settings};
use crate::error::{FintrackError, FintrackResult};
use crate::export::{
    export_transactions_csv, export_transactions_json, export_transactions_yaml,
    import_transactions_json, import_transactions_yaml,
};
use crate::models::TransactionInput;
use crate::services::LedgerSession;
use crate::storage::KeyValueStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON export document (re-importable)
    Json,
    /// YAML export document (re-importable, human-readable)
    Yaml,
    /// CSV, one row per transaction
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Where an export goes when no output path is given
pub fn default_export_path(
    paths: &FintrackPaths,
    settings: &Settings,
    format: ExportFormat,
) -> PathBuf {
    paths
        .export_dir()
        .join(&settings.export_file_name)
        .with_extension(format.extension())
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    session: &LedgerSession<S>,
    paths: &FintrackPaths,
    settings: &Settings,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> FintrackResult<()> {
    let output = match output {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            default_export_path(paths, settings, format)
        }
    };

    let transactions = session.ledger().transactions();

    let file = File::create(&output).map_err(|e| {
        FintrackError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_transactions_json(transactions, &mut writer)?,
        ExportFormat::Yaml => export_transactions_yaml(transactions, &mut writer)?,
        ExportFormat::Csv => export_transactions_csv(transactions, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    println!(
        "Exported {} transaction(s) to {}",
        transactions.len(),
        output.display()
    );
    Ok(())
}

/// Handle the import command
///
/// Every imported transaction gets a fresh ID and is charged to its budget
/// like any newly added expense. Nothing is recorded if any entry is invalid.
pub fn handle_import_command<S: KeyValueStore>(
    session: &mut LedgerSession<S>,
    file: &Path,
) -> FintrackResult<()> {
    let contents = fs::read_to_string(file)
        .map_err(|e| FintrackError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let transactions = match ExportFormat::from_path(file) {
        Some(ExportFormat::Yaml) => import_transactions_yaml(&contents)?,
        Some(ExportFormat::Csv) => {
            return Err(FintrackError::Import(
                "CSV files cannot be imported; use a JSON or YAML export".into(),
            ))
        }
        Some(ExportFormat::Json) | None => import_transactions_json(&contents)?,
    };

    // Documents list the most recent first; add oldest first to keep that order.
    let inputs: Vec<TransactionInput> = transactions
        .into_iter()
        .rev()
        .map(TransactionInput::from)
        .collect();

    let added = session.import_transactions(inputs)?;
    println!("Imported {} transaction(s) from {}", added.len(), file.display());
    Ok(())
}
