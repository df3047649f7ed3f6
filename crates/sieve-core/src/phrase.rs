//! Phrase matcher seam
//!
//! A phrase matcher is an independently maintained engine consulted as a
//! second opinion after dictionary detection. sieve ships one implementation
//! (`sieve_filter::CensorMatcher`) but anything implementing [`PhraseMatcher`]
//! can be plugged into the pipeline.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Term reported when a match carries no phrase metadata
pub const UNKNOWN_PHRASE: &str = "unknown";

/// One phrase occurrence, as a byte span in the text it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    pub phrase_id: usize,
    pub start: usize,
    pub end: usize,
}

impl PhraseMatch {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overlaps(&self, other: &PhraseMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMetadata {
    pub original_word: String,
}

pub trait PhraseMatcher: Send + Sync {
    fn has_match(&self, text: &str) -> Result<bool>;

    /// All matches in `text`, ordered by start; overlapping matches are kept
    /// only when `include_overlaps` is set
    fn get_all_matches(&self, text: &str, include_overlaps: bool) -> Result<Vec<PhraseMatch>>;

    /// Censor the given matches in `text`
    fn apply_to(&self, text: &str, matches: &[PhraseMatch]) -> Result<String>;

    fn phrase_metadata(&self, m: &PhraseMatch) -> Option<PhraseMetadata>;

    /// Canonical term for a match, `"unknown"` when metadata is absent
    fn original_word(&self, m: &PhraseMatch) -> String {
        self.phrase_metadata(m)
            .map(|meta| meta.original_word)
            .unwrap_or_else(|| UNKNOWN_PHRASE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> PhraseMatch {
        PhraseMatch {
            phrase_id: 0,
            start,
            end,
        }
    }

    #[test]
    fn test_len_of_reversed_span_is_zero() {
        assert_eq!(span(2, 6).len(), 4);
        assert_eq!(span(6, 2).len(), 0);
        assert!(span(6, 2).is_empty());
    }

    #[test]
    fn test_overlaps() {
        assert!(span(0, 4).overlaps(&span(3, 8)));
        assert!(!span(0, 4).overlaps(&span(4, 8)));
    }
}
