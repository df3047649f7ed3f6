//! Detector trait shared by every detection stage

use crate::Result;

/// Output of one detection stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Canonical terms found, first-seen order, no duplicates
    pub terms: Vec<String>,
    /// Input text with this stage's redactions applied
    pub redacted: String,
}

impl Detection {
    /// A stage that found nothing hands the text through unchanged
    pub fn unchanged(text: &str) -> Self {
        Self {
            terms: Vec::new(),
            redacted: text.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A source of profanity verdicts that can be chained with others
pub trait Detector: Send + Sync {
    /// Name of the stage, used in logs
    fn name(&self) -> &'static str;

    /// Detect terms in `text` and return it with those terms redacted
    fn detect(&self, text: &str) -> Result<Detection>;
}
