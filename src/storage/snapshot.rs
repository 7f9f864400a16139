//! Encoding of the persisted ledger blob
//!
//! The blob wraps the ledger state with a format version:
//! `{ "state": { ... }, "version": 0 }`.

use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::ledger::LedgerState;

/// Current persisted format version
pub const STATE_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedLedger {
    state: LedgerState,
    #[serde(default)]
    version: u32,
}

/// Serialize ledger state into the persisted blob
pub fn encode_state(state: &LedgerState) -> FintrackResult<String> {
    #[derive(Serialize)]
    struct Borrowed<'a> {
        state: &'a LedgerState,
        version: u32,
    }

    serde_json::to_string(&Borrowed {
        state,
        version: STATE_VERSION,
    })
    .map_err(|e| FintrackError::Storage(format!("Failed to serialize ledger state: {}", e)))
}

/// Parse a persisted blob back into ledger state
pub fn decode_state(blob: &str) -> FintrackResult<LedgerState> {
    let persisted: PersistedLedger = serde_json::from_str(blob)
        .map_err(|e| FintrackError::Storage(format!("Failed to parse ledger state: {}", e)))?;

    if persisted.version > STATE_VERSION {
        return Err(FintrackError::Storage(format!(
            "Ledger state version {} is newer than supported version {}",
            persisted.version, STATE_VERSION
        )));
    }

    Ok(persisted.state)
}
