//! The typed predicate set evaluated against analysis records.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalyzedString;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// A conjunctive set of attribute predicates.
///
/// Every predicate is an explicit optional field; an unset field imposes no
/// constraint. Set predicates are combined with logical AND. Length and
/// word-count bounds are signed so out-of-range caller input stays
/// well-defined rather than underflowing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Record's palindrome flag must equal this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Record length must be >= this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Record length must be <= this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    /// Record word count must equal this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    /// Record's frequency map must contain this character, compared
    /// case-insensitively on the lowercased key. A blank value is a
    /// constraint no record can satisfy, not the absence of one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
    /// Record value must contain at least one vowel. Only `true` is
    /// meaningful; `false` imposes no constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_any_vowel: Option<bool>,
    /// Record value must start with a vowel; never satisfied by the empty
    /// string. Only `true` is meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with_vowel: Option<bool>,
    /// Lowercased record value must have this (lowercased) prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    /// Lowercased record value must have this (lowercased) suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,
}

impl FilterSet {
    /// Create a set with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no predicate is set.
    pub fn is_unconstrained(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
            && self.contains_any_vowel.is_none()
            && self.starts_with_vowel.is_none()
            && self.starts_with.is_none()
            && self.ends_with.is_none()
    }

    /// Set the palindrome predicate.
    pub fn with_is_palindrome(mut self, value: bool) -> Self {
        self.is_palindrome = Some(value);
        self
    }

    /// Set the minimum length predicate.
    pub fn with_min_length(mut self, value: i64) -> Self {
        self.min_length = Some(value);
        self
    }

    /// Set the maximum length predicate.
    pub fn with_max_length(mut self, value: i64) -> Self {
        self.max_length = Some(value);
        self
    }

    /// Set the word count predicate.
    pub fn with_word_count(mut self, value: i64) -> Self {
        self.word_count = Some(value);
        self
    }

    /// Set the contains-character predicate.
    pub fn with_contains_character(mut self, value: impl Into<String>) -> Self {
        self.contains_character = Some(value.into());
        self
    }

    /// Evaluate every set predicate against a record.
    pub fn matches(&self, record: &AnalyzedString) -> bool {
        if let Some(expected) = self.is_palindrome {
            if record.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if (record.length as i64) < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if (record.length as i64) > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if record.word_count as i64 != count {
                return false;
            }
        }
        if let Some(ref needle) = self.contains_character {
            if !frequency_map_contains(record, needle) {
                return false;
            }
        }
        if self.contains_any_vowel == Some(true) {
            let has_vowel = record.value.to_lowercase().chars().any(|c| VOWELS.contains(&c));
            if !has_vowel {
                return false;
            }
        }
        if self.starts_with_vowel == Some(true) {
            let first_is_vowel = record
                .value
                .chars()
                .next()
                .map(|c| c.to_lowercase().any(|lc| VOWELS.contains(&lc)))
                .unwrap_or(false);
            if !first_is_vowel {
                return false;
            }
        }
        if let Some(ref prefix) = self.starts_with {
            if !record.value.to_lowercase().starts_with(&prefix.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref suffix) = self.ends_with {
            if !record.value.to_lowercase().ends_with(&suffix.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive membership test against the frequency map keys.
///
/// A blank needle never matches; this strictness is deliberate.
fn frequency_map_contains(record: &AnalyzedString, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return false;
    }
    let needle_lower = needle.to_lowercase();
    record
        .character_frequency_map
        .keys()
        .any(|key| key.to_lowercase().collect::<String>() == needle_lower)
}
