//! Record store: value-unique storage of analysis records keyed by content hash.

mod persistence;
mod records;

pub use records::RecordStore;
