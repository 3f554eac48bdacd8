//! Snapshot persistence for the record store - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::analysis::AnalyzedString;
use crate::error::{LexisError, Result};

use super::records::RecordStore;

impl RecordStore {
    /// Save all records to a JSON snapshot file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lexis::RecordStore;
    /// # fn example(store: &RecordStore) -> lexis::Result<()> {
    /// store.save("strings.snapshot.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    LexisError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            LexisError::Persistence(format!("Failed to create file '{}': {}", path.display(), e))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.enumerate()).map_err(|e| {
            LexisError::Persistence(format!("Failed to serialize record store: {}", e))
        })?;

        Ok(())
    }

    /// Load a record store from a JSON snapshot file.
    ///
    /// Record order is preserved from the snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            LexisError::Persistence(format!("Failed to open file '{}': {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let records: Vec<AnalyzedString> = serde_json::from_reader(reader).map_err(|e| {
            LexisError::Persistence(format!(
                "Failed to parse record snapshot '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_records(records))
    }
}
