//! Dictionary detector and redactor
//!
//! Drives the variation generator and boundary matcher across a dictionary.
//! Detection walks the dictionary in order and stops at the first matching
//! variation of each word. Redaction masks every occurrence of every
//! variation with a run as long as the canonical word.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

use sieve_core::{Detection, Detector, Error, Result, is_blank, merge_unique};
use tracing::debug;

use crate::cache::{CompiledWord, VariationCache};
use crate::dictionary::Dictionary;
use crate::tables::{MIN_WORD_LEN, effective_len, is_false_positive, is_word_char};
use crate::variations::VariationSet;

pub const DEFAULT_MASK: char = '*';

pub struct DictionaryDetector {
    dictionary: Dictionary,
    extra_false_positives: HashSet<String>,
    mask: char,
    cache: Arc<VariationCache>,
}

impl DictionaryDetector {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            extra_false_positives: HashSet::new(),
            mask: DEFAULT_MASK,
            cache: VariationCache::global(),
        }
    }

    /// Use `mask` for redaction; it must not be a letter, digit or `_`
    pub fn with_mask(mut self, mask: char) -> Result<Self> {
        if is_word_char(mask) {
            return Err(Error::Config(format!(
                "mask character '{}' must not be a letter, digit or '_'",
                mask
            )));
        }
        self.mask = mask;
        Ok(self)
    }

    /// Skip these words in addition to the built-in false positives
    pub fn with_false_positives<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_false_positives
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    pub fn with_cache(mut self, cache: Arc<VariationCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn mask(&self) -> char {
        self.mask
    }

    /// Dictionary words that take part in detection, in dictionary order
    pub fn eligible_words(&self) -> impl Iterator<Item = &String> {
        self.dictionary.words().iter().filter(move |word| {
            let lower = word.to_lowercase();
            effective_len(&lower) >= MIN_WORD_LEN
                && !is_false_positive(&lower)
                && !self.extra_false_positives.contains(&lower)
        })
    }

    fn compiled(&self, word: &str) -> Arc<CompiledWord> {
        self.cache.get_or_generate(word)
    }

    /// Variation set used for `word`
    pub fn variations(&self, word: &str) -> VariationSet {
        self.compiled(word).variations.clone()
    }

    /// Sum of variation counts over every eligible word
    pub fn total_variations(&self) -> usize {
        self.eligible_words()
            .map(|word| self.compiled(word).variations.len())
            .sum()
    }

    /// Canonical words found in `text`, in dictionary order
    pub fn detect_words(&self, text: &str) -> Vec<String> {
        if is_blank(text) {
            return Vec::new();
        }

        let mut detected = Vec::new();
        for word in self.eligible_words() {
            let compiled = self.compiled(word);
            if compiled.direct.is_match(text) || compiled.variants.is_match(text) {
                detected.push(word.clone());
            }
        }
        detected
    }

    /// Mask every variation of every dictionary word in `text`
    pub fn redact(&self, text: &str) -> String {
        self.redact_with_hits(text).0
    }

    /// Redact and report which words had at least one occurrence masked
    ///
    /// Passes repeat until one changes nothing: masking can expose a word
    /// boundary that an earlier pass did not see.
    pub fn redact_with_hits(&self, text: &str) -> (String, Vec<String>) {
        let mut current = text.to_string();
        let mut hits = Vec::new();

        if is_blank(text) {
            return (current, hits);
        }

        let mut pass = 0;
        loop {
            pass += 1;
            let mut changed = false;
            for word in self.eligible_words() {
                let compiled = self.compiled(word);
                let spans = compiled.variants.find_spans(&current);
                if spans.is_empty() {
                    continue;
                }

                current = mask_spans(&current, &spans, self.mask, word.chars().count());
                merge_unique(&mut hits, [word.clone()]);
                changed = true;
            }

            if !changed {
                break;
            }
            debug!("Redaction pass {} masked {} word(s)", pass, hits.len());
        }

        (current, hits)
    }
}

impl Detector for DictionaryDetector {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn detect(&self, text: &str) -> Result<Detection> {
        let mut terms = self.detect_words(text);
        let (redacted, hits) = self.redact_with_hits(text);
        merge_unique(&mut terms, hits);
        Ok(Detection { terms, redacted })
    }
}

/// Replace each span with `len` mask characters
fn mask_spans(text: &str, spans: &[Range<usize>], mask: char, len: usize) -> String {
    let replacement: String = std::iter::repeat_n(mask, len).collect();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.push_str(&replacement);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(words: &[&str]) -> DictionaryDetector {
        DictionaryDetector::new(Dictionary::from_words(words.iter().copied()))
            .with_cache(Arc::new(VariationCache::new()))
    }

    #[test]
    fn test_detects_plain_word() {
        let detector = detector(&["fuck", "shit"]);
        assert_eq!(detector.detect_words("oh shit"), vec!["shit"]);
    }

    #[test]
    fn test_preserves_dictionary_case() {
        let detector = detector(&["Shit"]);
        assert_eq!(detector.detect_words("SHIT"), vec!["Shit"]);
    }

    #[test]
    fn test_skips_short_and_false_positive_words() {
        let detector = detector(&["as", "a-s", "sex", "this"]);
        assert!(detector.detect_words("as a-s sex this").is_empty());
        assert_eq!(detector.eligible_words().count(), 0);
    }

    #[test]
    fn test_extra_false_positives() {
        let detector = detector(&["crap", "damn"]).with_false_positives(["Damn"]);
        assert_eq!(detector.detect_words("damn this crap"), vec!["crap"]);
    }

    #[test]
    fn test_redacts_with_canonical_length() {
        let detector = detector(&["fuck"]);
        assert_eq!(detector.redact("what the f-u-c-k"), "what the ****");
        assert_eq!(detector.redact("fuuuuck that"), "**** that");
        assert_eq!(detector.redact("fck it"), "**** it");
    }

    #[test]
    fn test_redaction_preserves_boundaries() {
        let detector = detector(&["shit"]);
        assert_eq!(detector.redact("(shit), SHIT! sh1t."), "(****), ****! ****.");
    }

    #[test]
    fn test_redaction_is_cumulative() {
        let detector = detector(&["fuck", "shit"]);
        assert_eq!(detector.redact("shit fuck shit"), "**** **** ****");
    }

    #[test]
    fn test_loose_match_can_expose_a_boundary() {
        let detector = detector(&["ass", "fuck"]);
        let (redacted, hits) = detector.redact_with_hits("xf-u-c-kass");
        assert_eq!(redacted, "x*******");
        assert_eq!(hits, vec!["fuck", "ass"]);
        assert_eq!(detector.redact(&redacted), redacted);
    }

    #[test]
    fn test_custom_mask() {
        assert!(detector(&["shit"]).with_mask('x').is_err());
        assert!(detector(&["shit"]).with_mask('_').is_err());

        let hashed = detector(&["shit"]).with_mask('#').unwrap();
        assert_eq!(hashed.redact("shit"), "####");
    }

    #[test]
    fn test_detector_trait() {
        let detector = detector(&["fuck", "shit"]);
        let detection = detector.detect("Shit, f u c k.").unwrap();
        assert_eq!(detection.terms, vec!["fuck", "shit"]);
        assert_eq!(detection.redacted, "****, ****.");
    }

    #[test]
    fn test_blank_text() {
        let detector = detector(&["fuck"]);
        assert!(detector.detect_words("   ").is_empty());
        assert_eq!(detector.redact("   "), "   ");
    }

    #[test]
    fn test_total_variations() {
        let detector = detector(&["fuck", "shit", "as"]);
        let expected = detector.variations("fuck").len() + detector.variations("shit").len();
        assert_eq!(detector.total_variations(), expected);
    }
}
