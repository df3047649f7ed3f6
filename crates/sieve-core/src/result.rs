//! Filter result domain model

use serde::{Deserialize, Serialize};

/// Verdict for one piece of text, handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    /// Text as submitted
    pub original: String,
    /// Text after every redaction stage
    pub filtered: String,
    /// Canonical terms in order of first detection, without duplicates
    pub detected_words: Vec<String>,
    pub is_clean: bool,
}

impl FilterResult {
    /// Result for text that needed no transformation
    pub fn clean(text: &str) -> Self {
        Self {
            original: text.to_string(),
            filtered: text.to_string(),
            detected_words: Vec::new(),
            is_clean: true,
        }
    }

    /// Build a result from collected terms; clean iff nothing was detected
    pub fn new(original: &str, filtered: String, detected_words: Vec<String>) -> Self {
        let is_clean = detected_words.is_empty();
        Self {
            original: original.to_string(),
            filtered,
            detected_words,
            is_clean,
        }
    }

    /// Number of distinct terms detected
    pub fn detection_count(&self) -> usize {
        self.detected_words.len()
    }
}

/// True for empty or whitespace-only text, which is always clean
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Append terms not yet present, keeping first-seen order
///
/// Terms are compared by lowercase form; the first spelling seen is kept.
pub fn merge_unique(into: &mut Vec<String>, terms: impl IntoIterator<Item = String>) {
    for term in terms {
        let lower = term.to_lowercase();
        if !into.iter().any(|seen| seen.to_lowercase() == lower) {
            into.push(term);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_result() {
        let result = FilterResult::clean("   ");
        assert!(result.is_clean);
        assert_eq!(result.filtered, result.original);
        assert!(result.detected_words.is_empty());
    }

    #[test]
    fn test_merge_unique_keeps_order() {
        let mut terms = vec!["shit".to_string()];
        merge_unique(
            &mut terms,
            vec!["hell".to_string(), "shit".to_string(), "hell".to_string()],
        );
        assert_eq!(terms, vec!["shit", "hell"]);
    }

    #[test]
    fn test_merge_unique_ignores_case() {
        let mut terms = vec!["Hell".to_string()];
        merge_unique(&mut terms, vec!["hell".to_string(), "SHIT".to_string(), "shit".to_string()]);
        assert_eq!(terms, vec!["Hell", "SHIT"]);
    }

    #[test]
    fn test_camel_case_serialization() {
        let result = FilterResult::new("a", "a".to_string(), vec!["x".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isClean"], false);
        assert_eq!(json["detectedWords"][0], "x");
    }
}
