//! Pure analysis of raw string values.

use chrono::Utc;
use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use super::record::AnalyzedString;

/// Compute the content-addressed identifier for a value: lowercase hex
/// SHA-256 over its UTF-8 bytes.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Analyze a raw string and produce its attribute record.
///
/// Pure and deterministic apart from `created_at`; never fails, including
/// for the empty string.
pub fn analyze(value: &str) -> AnalyzedString {
    let mut character_frequency_map: IndexMap<char, usize> = IndexMap::new();
    let mut length = 0;
    for ch in value.chars() {
        *character_frequency_map.entry(ch).or_insert(0) += 1;
        length += 1;
    }

    AnalyzedString {
        id: content_hash(value),
        value: value.to_string(),
        length,
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: value.split_whitespace().count(),
        character_frequency_map,
        created_at: Utc::now(),
    }
}

/// Case-insensitive palindrome check over the full lowercase form.
fn is_palindrome(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower.chars().eq(lower.chars().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_is_lowercase_hex() {
        let id = content_hash("level");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let a = analyze("hello world");
        let b = analyze("hello world");
        assert_eq!(a.id, b.id);
        assert_eq!(a.character_frequency_map, b.character_frequency_map);
    }

    #[test]
    fn test_analyze_level() {
        let record = analyze("level");
        assert_eq!(record.length, 5);
        assert!(record.is_palindrome);
        assert_eq!(record.unique_characters, 3); // l, e, v
        assert_eq!(record.word_count, 1);
        assert_eq!(record.character_frequency_map[&'l'], 2);
        assert_eq!(record.character_frequency_map[&'e'], 2);
        assert_eq!(record.character_frequency_map[&'v'], 1);
    }

    #[test]
    fn test_palindrome_case_insensitive() {
        assert!(analyze("Racecar").is_palindrome);
        assert!(!analyze("hello").is_palindrome);
        assert!(analyze("").is_palindrome);
    }

    #[test]
    fn test_palindrome_keeps_whitespace() {
        // Whitespace is not stripped, so this is not a palindrome.
        assert!(!analyze("never odd or even").is_palindrome);
        assert!(analyze("a b a").is_palindrome);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(analyze("  ").word_count, 0);
        assert_eq!(analyze("").word_count, 0);
        assert_eq!(analyze("one two  three").word_count, 3);
        assert_eq!(analyze("  leading and trailing  ").word_count, 3);
    }

    #[test]
    fn test_frequency_map_first_seen_order() {
        let record = analyze("abca");
        let keys: Vec<char> = record.character_frequency_map.keys().copied().collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_case_sensitive_frequency_keys() {
        let record = analyze("Aa");
        assert_eq!(record.unique_characters, 2);
        assert_eq!(record.character_frequency_map[&'A'], 1);
        assert_eq!(record.character_frequency_map[&'a'], 1);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let record = analyze("héllo");
        assert_eq!(record.length, 5);
        assert_eq!(record.value.len(), 6); // é is two bytes
    }

    #[test]
    fn test_frequency_sums_to_length() {
        let record = analyze("ábc déf ábc");
        let sum: usize = record.character_frequency_map.values().sum();
        assert_eq!(sum, record.length);
        assert_eq!(record.character_frequency_map.len(), record.unique_characters);
    }
}
