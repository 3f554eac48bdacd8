//! In-memory record store with an interior read/write lock.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::analysis::{analyze, content_hash, AnalyzedString};
use crate::error::{LexisError, Result};

/// Stores analysis records keyed by content hash, enforcing value uniqueness.
///
/// The store owns its synchronization: a single read/write lock guards the
/// record map, so mutations serialize with each other and with lookups, and
/// no enumeration observes a partially-written record. Because the id is a
/// pure function of the value, value lookups recompute the content hash
/// instead of maintaining a secondary index.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<IndexMap<String, AnalyzedString>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing record set, preserving order.
    pub(crate) fn from_records(records: Vec<AnalyzedString>) -> Self {
        let map = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Analyze a value and persist the resulting record.
    ///
    /// The duplicate check and the insert happen under one write-lock
    /// acquisition, so concurrent creates for the same value yield exactly
    /// one stored record; the losers observe [`LexisError::DuplicateValue`].
    pub fn create(&self, value: &str) -> Result<AnalyzedString> {
        let record = analyze(value);
        let mut records = self.records.write();
        if records.contains_key(&record.id) {
            return Err(LexisError::DuplicateValue {
                value: value.to_string(),
            });
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    /// Look up a record by its exact value.
    pub fn get_by_value(&self, value: &str) -> Option<AnalyzedString> {
        self.records.read().get(&content_hash(value)).cloned()
    }

    /// Look up a record by its content-hash identifier.
    pub fn get_by_id(&self, id: &str) -> Option<AnalyzedString> {
        self.records.read().get(id).cloned()
    }

    /// Remove the record for a value.
    pub fn delete_by_value(&self, value: &str) -> Result<()> {
        let mut records = self.records.write();
        match records.shift_remove(&content_hash(value)) {
            Some(_) => Ok(()),
            None => Err(LexisError::NotFound {
                value: value.to_string(),
            }),
        }
    }

    /// Snapshot of all current records in insertion order.
    pub fn enumerate(&self) -> Vec<AnalyzedString> {
        self.records.read().values().cloned().collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
