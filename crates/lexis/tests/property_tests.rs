//! Property-based tests for the Lexis analyzer and query translator.
//!
//! These tests use proptest to generate random inputs and verify that the
//! core invariants hold under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: Analysis and translation never crash on any input
//! 2. **Determinism**: Same input always produces same output
//! 3. **Invariants**: Frequency totals, key counts and palindrome symmetry
//!    always hold
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p lexis --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p lexis --test property_tests
//! ```

use proptest::prelude::*;

use lexis::{analyze, filter, translate, FilterSet, RecordStore};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate arbitrary ASCII strings (common case)
fn ascii_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\.\\s]{0,100}"
}

/// Generate arbitrary unicode strings (edge cases)
fn unicode_string() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Generate strings that look like natural-language queries
fn query_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // Recognizable phrasing
        "(all )?(single word |two word |multi word )?(palindromic )?strings( longer than [0-9]{1,3})?( shorter than [0-9]{1,3})?",
        // Letter references
        "strings containing (the )?letter [a-z]",
        // Vowel phrasing
        "strings (containing a vowel|has vowels|starting with a vowel)",
        // Unrecognizable noise
        "[a-z ]{0,40}",
    ]
}

// =============================================================================
// Analyzer Properties
// =============================================================================

mod analyzer_tests {
    use super::*;

    proptest! {
        /// Analysis never panics on any unicode input.
        #[test]
        fn analyze_never_panics(value in unicode_string()) {
            let _ = analyze(&value);
        }

        /// The id is a pure function of the value.
        #[test]
        fn analyze_id_is_deterministic(value in unicode_string()) {
            let a = analyze(&value);
            let b = analyze(&value);
            prop_assert_eq!(a.id, b.id);
        }

        /// The id is always a 64-character lowercase hex digest.
        #[test]
        fn analyze_id_shape(value in unicode_string()) {
            let record = analyze(&value);
            prop_assert_eq!(record.id.len(), 64);
            prop_assert!(record.id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }

        /// Frequency values sum to the length; key count equals unique_characters.
        #[test]
        fn frequency_map_accounts_for_every_char(value in unicode_string()) {
            let record = analyze(&value);
            let total: usize = record.character_frequency_map.values().sum();
            prop_assert_eq!(total, record.length);
            prop_assert_eq!(record.character_frequency_map.len(), record.unique_characters);
        }

        /// Length counts chars, never bytes.
        #[test]
        fn length_is_char_count(value in unicode_string()) {
            prop_assert_eq!(analyze(&value).length, value.chars().count());
        }

        /// Word count never exceeds length for ASCII input and is zero only
        /// for whitespace-only input.
        #[test]
        fn word_count_consistent(value in ascii_string()) {
            let record = analyze(&value);
            if record.word_count == 0 {
                prop_assert!(value.trim().is_empty());
            } else {
                prop_assert!(record.word_count <= record.length);
            }
        }

        /// A string concatenated with its own reverse is always a palindrome.
        #[test]
        fn mirrored_string_is_palindrome(value in "[a-z]{0,30}") {
            let mirrored: String =
                value.chars().chain(value.chars().rev()).collect();
            prop_assert!(analyze(&mirrored).is_palindrome);
        }
    }
}

// =============================================================================
// Store Properties
// =============================================================================

mod store_tests {
    use super::*;

    proptest! {
        /// Create-then-get always round-trips, and duplicates are rejected.
        #[test]
        fn create_get_round_trip(value in unicode_string()) {
            let store = RecordStore::new();
            let created = store.create(&value).unwrap();
            let fetched = store.get_by_value(&value).unwrap();
            prop_assert_eq!(&created, &fetched);
            prop_assert!(store.create(&value).is_err());
            prop_assert_eq!(store.len(), 1);
        }

        /// Unconstrained filtering returns every stored record.
        #[test]
        fn unconstrained_filter_is_identity(values in prop::collection::hash_set(ascii_string(), 0..10)) {
            let store = RecordStore::new();
            for value in &values {
                store.create(value).unwrap();
            }
            let all = filter(&store.enumerate(), &FilterSet::new());
            prop_assert_eq!(all.len(), values.len());
        }
    }
}

// =============================================================================
// Translator Properties
// =============================================================================

mod translator_tests {
    use super::*;

    proptest! {
        /// Translation never panics on any unicode input.
        #[test]
        fn translate_never_panics(query in unicode_string()) {
            let _ = translate(&query);
        }

        /// Translation is deterministic.
        #[test]
        fn translate_is_deterministic(query in query_like()) {
            prop_assert_eq!(translate(&query).ok(), translate(&query).ok());
        }

        /// A successful translation always produces at least one predicate,
        /// and any synthesized length bounds are consistent.
        #[test]
        fn translate_output_is_consistent(query in query_like()) {
            if let Ok(filters) = translate(&query) {
                prop_assert!(!filters.is_unconstrained());
                if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
                    prop_assert!(min <= max);
                }
            }
        }
    }
}
