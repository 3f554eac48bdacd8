//! Filter evaluation over record collections.

use crate::analysis::AnalyzedString;

use super::set::FilterSet;

/// Return the records matching every predicate in the set.
///
/// An internally contradictory set (e.g. `min_length > max_length` supplied
/// directly by a caller) is not an error here; it simply matches nothing.
/// The translator is the layer that rejects contradictions it synthesized
/// itself.
pub fn filter(records: &[AnalyzedString], filters: &FilterSet) -> Vec<AnalyzedString> {
    records
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}
