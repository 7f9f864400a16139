//! Storage layer for FinTrack
//!
//! The ledger is persisted through a small key-value collaborator: one opaque
//! text blob per key. [`FileStore`] keeps each key in its own JSON file with
//! atomic writes; [`MemoryStore`] keeps everything in process.

pub mod file_io;
pub mod file_store;
pub mod memory;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use snapshot::{decode_state, encode_state, STATE_VERSION};

use crate::error::FintrackResult;

/// A key-value persistence collaborator
pub trait KeyValueStore {
    /// Load the blob stored under `key`, if any
    fn load(&self, key: &str) -> FintrackResult<Option<String>>;

    /// Store `blob` under `key`, replacing any previous value
    fn save(&self, key: &str, blob: &str) -> FintrackResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn load(&self, key: &str) -> FintrackResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> FintrackResult<()> {
        (**self).save(key, blob)
    }
}
