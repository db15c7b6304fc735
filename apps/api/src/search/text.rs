//! Text normalization and keyword-overlap similarity.
//!
//! The search corpus is short free text (titles, company names, locations),
//! so matching is a plain bag-of-words Jaccard index over normalized tokens.

use std::collections::HashSet;

/// Lowercases `text` and deletes every character that is not an ASCII letter
/// or whitespace. Digits, punctuation, and non-Latin scripts all collapse to
/// nothing; whitespace runs are preserved as-is.
///
/// This is a character-class filter, not a tokenizer: a string of only
/// digits and punctuation normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// The set of unique whitespace-delimited tokens in the normalized text.
/// Empty or whitespace-only input yields the empty set.
pub fn token_set(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Jaccard index of two token sets: |intersection| / |union|.
/// Zero when either side has no tokens.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Keyword-overlap similarity of two free-text strings, in [0, 1].
pub fn similarity(query: &str, text: &str) -> f64 {
    jaccard(&token_set(query), &token_set(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_strips_digits_and_punctuation() {
        assert_eq!(normalize("ABC123!!"), "abc");
    }

    #[test]
    fn test_normalize_digits_only_becomes_empty() {
        assert_eq!(normalize("1234-5678!?"), "");
    }

    #[test]
    fn test_normalize_preserves_whitespace_runs() {
        assert_eq!(normalize("Data   Analyst"), "data   analyst");
    }

    #[test]
    fn test_normalize_drops_non_latin_scripts() {
        assert_eq!(normalize("データ Analyst"), " analyst");
        // Accented letters are not ASCII and are removed after lowercasing.
        assert_eq!(normalize("Résumé"), "rsum");
    }

    #[test]
    fn test_token_set_collapses_duplicates() {
        let tokens = token_set("data Data DATA analyst");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("data"));
        assert!(tokens.contains("analyst"));
    }

    #[test]
    fn test_token_set_of_whitespace_is_empty() {
        assert!(token_set("   ").is_empty());
        assert!(token_set("").is_empty());
        // Punctuation-only input normalizes to nothing as well.
        assert!(token_set("!!! 123 ...").is_empty());
    }

    #[test]
    fn test_similarity_zero_when_either_side_empty() {
        assert_eq!(similarity("", "data analyst"), 0.0);
        assert_eq!(similarity("data analyst", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_similarity_matches_worked_example() {
        // Query tokens: {data, analyst, cebu, fulltime} — the hyphen in
        // "Full-time" is stripped, fusing the word into one token.
        let query = "Data Analyst Cebu Full-time";
        let composite = "Data Analyst Acme Cebu Full-time";
        // intersection = 4, union = 5
        assert!((similarity(query, composite) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_single_shared_token() {
        let query = "Data Analyst Cebu Full-time";
        let composite = "Data Entry Clerk Beta Manila Part-time";
        // intersection = {data} = 1, union = 9
        assert!((similarity(query, composite) - 1.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_identical_texts_is_one() {
        assert_eq!(similarity("data analyst cebu", "Cebu DATA analyst!"), 1.0);
    }
}
