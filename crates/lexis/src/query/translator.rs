//! Heuristic translation from free text to a [`FilterSet`].
//!
//! Deterministic, case-insensitive, substring/pattern based. Each rule fires
//! independently, so one query may set several predicates; rules that target
//! the same predicate overwrite in evaluation order (last match wins).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LexisError, Result};
use crate::filter::FilterSet;

static LONGER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"longer than (\d+)").unwrap());

static SHORTER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"shorter than (\d+)").unwrap());

/// Single word-character letter reference, e.g. "containing the letter z".
static CONTAINS_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"contain(?:s|ing) (?:the )?letter (\w)\b").unwrap());

/// Phrases that ask for any vowel at all rather than a specific letter.
const ANY_VOWEL_PHRASES: &[&str] = &[
    "containing a vowel",
    "containing any vowel",
    "has a vowel",
    "has any vowel",
    "contains vowel",
    "containing vowels",
    "contains vowels",
    "has vowels",
];

const STARTS_WITH_VOWEL_PHRASES: &[&str] =
    &["first vowel", "starts with a vowel", "starting with a vowel"];

/// Translate a free-text query into a structured predicate set.
///
/// Fails with [`LexisError::UnparseableQuery`] when no rule recognizes
/// anything in the query, and with [`LexisError::ConflictingFilters`] when
/// the synthesized length bounds are impossible. The conflict check runs
/// before the empty check.
///
/// # Example
///
/// ```
/// let filters = lexis::translate("palindromic strings longer than 10").unwrap();
/// assert_eq!(filters.is_palindrome, Some(true));
/// assert_eq!(filters.min_length, Some(11));
/// ```
pub fn translate(query: &str) -> Result<FilterSet> {
    let trimmed = query.trim();
    let lower = trimmed.to_lowercase();
    let mut filters = FilterSet::new();

    if lower.contains("single word") || lower.contains("one word") {
        filters.word_count = Some(1);
    }
    if lower.contains("two words") || lower.contains("two word") {
        filters.word_count = Some(2);
    }
    // Approximation carried over from the original rule set: "multi word"
    // collapses to exactly two words, not two-or-more.
    if lower.contains("multi word") || lower.contains("multiple words") || lower.contains("multi-word")
    {
        filters.word_count = Some(2);
    }

    if lower.contains("palindromic") || lower.contains("palindrome") {
        filters.is_palindrome = Some(true);
    }

    // "longer than N" is strict, so the bound is N + 1.
    if let Some(caps) = LONGER_THAN.captures(&lower) {
        if let Ok(n) = caps[1].parse::<i64>() {
            filters.min_length = Some(n + 1);
        }
    }
    // "shorter than N" is strict, so the bound is N - 1.
    if let Some(caps) = SHORTER_THAN.captures(&lower) {
        if let Ok(n) = caps[1].parse::<i64>() {
            filters.max_length = Some(n - 1);
        }
    }

    // Only the first letter reference is honored. A vowel named here stays a
    // specific-character match; it does not become contains_any_vowel.
    if let Some(caps) = CONTAINS_LETTER.captures(&lower) {
        filters.contains_character = Some(caps[1].to_string());
    }

    if ANY_VOWEL_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        filters.contains_any_vowel = Some(true);
    }

    if STARTS_WITH_VOWEL_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
    {
        filters.starts_with_vowel = Some(true);
    }

    if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
        if min > max {
            return Err(LexisError::ConflictingFilters {
                min_length: min,
                max_length: max,
            });
        }
    }

    if filters.is_unconstrained() {
        return Err(LexisError::UnparseableQuery(trimmed.to_string()));
    }

    Ok(filters)
}
