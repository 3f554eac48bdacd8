//! Error types for the Lexis library.

use thiserror::Error;

/// Main error type for Lexis operations.
#[derive(Debug, Error)]
pub enum LexisError {
    /// A record with this exact value already exists in the store.
    #[error("String already exists: '{value}'")]
    DuplicateValue { value: String },

    /// No record with this value exists in the store.
    #[error("String not found: '{value}'")]
    NotFound { value: String },

    /// The natural-language query yielded zero recognized predicates.
    #[error("Unable to parse query: '{0}'")]
    UnparseableQuery(String),

    /// The translated query produced an impossible length range.
    #[error("Conflicting filters: min_length {min_length} exceeds max_length {max_length}")]
    ConflictingFilters { min_length: i64, max_length: i64 },

    /// Content hash computation failed.
    ///
    /// Not expected under normal operation; the digest algorithm is fixed
    /// and always available. Treated as an unrecoverable internal fault.
    #[error("Hash computation failed: {0}")]
    HashComputation(String),

    /// Snapshot save/load error.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for Lexis operations.
pub type Result<T> = std::result::Result<T, LexisError>;
