//! The analysis record entity.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Derived attributes for one distinct string value.
///
/// Immutable once created: records are produced by [`analyze`](crate::analyze)
/// on first submission of a value and never mutated afterwards. All character
/// counts use Unicode scalar values (`char`), not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedString {
    /// Content-addressed identifier: lowercase hex SHA-256 of the UTF-8
    /// bytes of `value`. 64 characters; primary key.
    pub id: String,
    /// The original string, byte-for-byte as submitted. Unique across the store.
    pub value: String,
    /// Character count of `value`.
    pub length: usize,
    /// Whether the lowercase form of `value` equals its own reverse.
    /// No whitespace/punctuation stripping, no diacritic normalization.
    pub is_palindrome: bool,
    /// Number of distinct characters ('A' and 'a' are distinct).
    pub unique_characters: usize,
    /// Whitespace-delimited token count; 0 for empty or all-whitespace input.
    pub word_count: usize,
    /// Occurrence count per distinct character, keyed in first-seen order.
    pub character_frequency_map: IndexMap<char, usize>,
    /// Timestamp of first successful analysis.
    pub created_at: DateTime<Utc>,
}
