//! File-backed key-value store
//!
//! Each key maps to `<dir>/<key>.json`.

use std::path::PathBuf;

use super::file_io::{read_text, write_text_atomic};
use super::KeyValueStore;
use crate::error::{FintrackError, FintrackResult};

/// Key-value store keeping one file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> FintrackResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(FintrackError::Storage(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> FintrackResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn save(&self, key: &str, blob: &str) -> FintrackResult<()> {
        write_text_atomic(self.path_for(key)?, blob)
    }
}
