//! Secondary phrase matching
//!
//! [`CensorMatcher`] is the built-in phrase matcher, backed by `rustrict`.
//! [`PhraseDetector`] turns any [`PhraseMatcher`] into a pipeline stage.

pub mod engine;
pub mod terms;

use std::sync::Arc;

use sieve_core::{Detection, Detector, PhraseMatcher, Result, is_blank, merge_unique};

pub use engine::CensorMatcher;

/// Pipeline stage backed by a phrase matcher
pub struct PhraseDetector {
    matcher: Arc<dyn PhraseMatcher>,
}

impl PhraseDetector {
    pub fn new(matcher: Arc<dyn PhraseMatcher>) -> Self {
        Self { matcher }
    }
}

impl Detector for PhraseDetector {
    fn name(&self) -> &'static str {
        "phrases"
    }

    fn detect(&self, text: &str) -> Result<Detection> {
        if is_blank(text) || !self.matcher.has_match(text)? {
            return Ok(Detection::unchanged(text));
        }

        let matches = self.matcher.get_all_matches(text, true)?;
        let redacted = self.matcher.apply_to(text, &matches)?;

        let mut terms = Vec::new();
        merge_unique(&mut terms, matches.iter().map(|m| self.matcher.original_word(m)));
        Ok(Detection { terms, redacted })
    }
}
