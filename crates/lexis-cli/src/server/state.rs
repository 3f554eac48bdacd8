//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use lexis::RecordStore;

/// Shared application state.
///
/// The record store carries its own interior lock, so handlers share a plain
/// `Arc` handle.
#[derive(Clone)]
pub struct AppState {
    /// The record store being served.
    pub store: Arc<RecordStore>,
    /// Snapshot file path, if snapshotting is configured.
    pub store_path: Option<PathBuf>,
    /// Whether to save the snapshot after each mutation.
    pub auto_save: bool,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Arc<RecordStore>, store_path: Option<PathBuf>, auto_save: bool) -> Self {
        Self {
            store,
            store_path,
            auto_save,
        }
    }

    /// Save the store snapshot, if a path is configured.
    pub fn save(&self) -> Result<(), lexis::LexisError> {
        match self.store_path {
            Some(ref path) => self.store.save(path),
            None => Ok(()),
        }
    }

    /// Save after a mutation when auto-save is enabled.
    pub fn save_if_auto(&self) -> Result<(), lexis::LexisError> {
        if self.auto_save {
            self.save()
        } else {
            Ok(())
        }
    }
}
