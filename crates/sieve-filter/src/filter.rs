//! Profanity filter facade

use std::sync::Arc;

use sieve_core::{FilterResult, PhraseMatcher, Result};

use crate::combiner::Combiner;
use crate::detector::{DEFAULT_MASK, DictionaryDetector};
use crate::dictionary::Dictionary;
use crate::phrases::{CensorMatcher, PhraseDetector};

/// Adjustments applied to the built-in word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub mask: char,
    /// Words added to the dictionary
    pub extra_words: Vec<String>,
    /// Words removed from the dictionary and never reported by the phrase matcher
    pub allowed_words: Vec<String>,
    /// Words never reported, on top of the built-in false positives
    pub extra_false_positives: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK,
            extra_words: Vec::new(),
            allowed_words: Vec::new(),
            extra_false_positives: Vec::new(),
        }
    }
}

/// Two-stage filter: dictionary detector followed by a phrase matcher
pub struct ProfanityFilter {
    dictionary: Arc<DictionaryDetector>,
    phrases: Arc<PhraseDetector>,
    combined: Combiner,
}

impl ProfanityFilter {
    /// Built-in dictionary and phrase matcher with default options
    pub fn new() -> Self {
        Self::build(
            DictionaryDetector::new(Dictionary::english()),
            Arc::new(CensorMatcher::new()),
        )
    }

    pub fn with_options(options: &FilterOptions) -> Result<Self> {
        let dictionary = Dictionary::english()
            .with_words(&options.extra_words)
            .without_words(&options.allowed_words);
        let detector = DictionaryDetector::new(dictionary)
            .with_mask(options.mask)?
            .with_false_positives(&options.extra_false_positives);
        let phrases = CensorMatcher::new()
            .with_replacement(options.mask)
            .with_terms(&options.extra_words)
            .without_words(&options.allowed_words);

        Ok(Self::build(detector, Arc::new(phrases)))
    }

    /// Replace the secondary matcher, keeping the dictionary stage
    pub fn with_phrase_matcher(self, matcher: Arc<dyn PhraseMatcher>) -> Self {
        let dictionary = self.dictionary;
        let phrases = Arc::new(PhraseDetector::new(matcher));
        Self {
            combined: Self::pipeline(&dictionary, &phrases),
            dictionary,
            phrases,
        }
    }

    fn build(detector: DictionaryDetector, matcher: Arc<dyn PhraseMatcher>) -> Self {
        let dictionary = Arc::new(detector);
        let phrases = Arc::new(PhraseDetector::new(matcher));
        Self {
            combined: Self::pipeline(&dictionary, &phrases),
            dictionary,
            phrases,
        }
    }

    fn pipeline(dictionary: &Arc<DictionaryDetector>, phrases: &Arc<PhraseDetector>) -> Combiner {
        Combiner::new()
            .with_stage(dictionary.clone())
            .with_stage(phrases.clone())
    }

    /// Dictionary detection and redaction, then the phrase matcher
    pub fn detect_and_redact(&self, text: &str) -> FilterResult {
        self.combined.combine(text)
    }

    /// Dictionary stage alone
    pub fn detect_only(&self, text: &str) -> FilterResult {
        Combiner::new()
            .with_stage(self.dictionary.clone())
            .combine(text)
    }

    /// Phrase matcher alone
    pub fn secondary_only(&self, text: &str) -> FilterResult {
        Combiner::new()
            .with_stage(self.phrases.clone())
            .combine(text)
    }

    pub fn dictionary(&self) -> &DictionaryDetector {
        &self.dictionary
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}
