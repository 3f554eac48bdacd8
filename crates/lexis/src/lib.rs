//! Lexis: string analysis engine with predicate filtering and heuristic
//! natural-language queries.
//!
//! Lexis derives a canonical set of attributes from arbitrary text (content
//! hash, length, palindrome status, per-character frequency, word count),
//! stores the result keyed by content hash, and answers lookups by exact
//! value or by a conjunctive set of attribute predicates. Free-text queries
//! are translated into the same predicate set by deterministic pattern
//! heuristics.
//!
//! # Core Principles
//!
//! - **Content-addressed**: a record's id is a pure function of its value
//! - **Immutable records**: analysis results are never mutated, only deleted
//! - **Typed predicates**: every filter is an explicit optional field, not a
//!   loosely-typed map
//!
//! # Example
//!
//! ```
//! use lexis::{filter, translate, RecordStore};
//!
//! let store = RecordStore::new();
//! store.create("level").unwrap();
//! store.create("hello world").unwrap();
//!
//! let filters = translate("single word palindromic strings").unwrap();
//! let matches = filter(&store.enumerate(), &filters);
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].value, "level");
//! ```

pub mod analysis;
pub mod error;
pub mod filter;
pub mod query;
pub mod store;

pub use analysis::{analyze, content_hash, AnalyzedString};
pub use error::{LexisError, Result};
pub use filter::{filter, FilterSet};
pub use query::translate;
pub use store::RecordStore;
