//! String analysis: derive a canonical attribute record from a raw value.

mod analyzer;
mod record;

pub use analyzer::{analyze, content_hash};
pub use record::AnalyzedString;
