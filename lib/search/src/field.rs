//! Field scorer
//!
//! Scores one field's text against the query keywords. The whole field is
//! compared: an exact (case-insensitive) match earns twice the weight, a
//! substring match earns the weight once. Contributions from different
//! keywords add up without a cap.

use scholarx_core::Keyword;

/// Multiplier for a keyword equal to the whole field
pub const EXACT_MATCH_FACTOR: f64 = 2.0;

/// Multiplier for a keyword found inside the field
pub const PARTIAL_MATCH_FACTOR: f64 = 1.0;

/// Score `value` against `keywords` with the given weight.
///
/// Absent and empty fields score 0.
pub fn score_field(value: Option<&str>, keywords: &[Keyword], weight: f64) -> f64 {
    match value {
        Some(text) if !text.is_empty() => score_lowercase(&text.to_lowercase(), keywords, weight),
        _ => 0.0,
    }
}

/// Same as [`score_field`] for text that is already lowercase
pub(crate) fn score_lowercase(text: &str, keywords: &[Keyword], weight: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_str();
            if text == keyword {
                EXACT_MATCH_FACTOR * weight
            } else if text.contains(keyword) {
                PARTIAL_MATCH_FACTOR * weight
            } else {
                0.0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarx_core::tokenize;

    #[test]
    fn test_absent_or_empty_field() {
        let keywords = tokenize("rust");
        assert_eq!(score_field(None, &keywords, 3.0), 0.0);
        assert_eq!(score_field(Some(""), &keywords, 3.0), 0.0);
    }

    #[test]
    fn test_exact_beats_substring() {
        let keywords = tokenize("ai");
        let exact = score_field(Some("AI"), &keywords, 1.5);
        let partial = score_field(Some("AI Research Lab"), &keywords, 1.5);
        assert_eq!(exact, 3.0);
        assert_eq!(partial, 1.5);
        assert!(exact > partial);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(score_field(Some("Operating Systems"), &tokenize("biology"), 3.0), 0.0);
    }

    #[test]
    fn test_contributions_add_up() {
        let keywords = tokenize("data base");
        // both keywords are substrings of the field
        assert_eq!(score_field(Some("Database Systems"), &keywords, 2.0), 4.0);
    }

    #[test]
    fn test_repeated_keywords_amplify() {
        let once = score_field(Some("Python"), &tokenize("python"), 1.0);
        let twice = score_field(Some("Python"), &tokenize("python python"), 1.0);
        assert_eq!(twice, 2.0 * once);
    }

    #[test]
    fn test_whole_field_comparison_only() {
        // "ml" is not equal to the whole field, only contained in it
        assert_eq!(score_field(Some("ML Ops"), &tokenize("ml"), 1.0), 1.0);
    }
}
