//! Ordered composition of detection stages

use std::sync::Arc;

use sieve_core::{Detector, FilterResult, is_blank, merge_unique};
use tracing::{debug, warn};

/// Runs stages in order, each on the previous stage's redacted text
///
/// Terms are merged by union in first-seen order. A failing stage is skipped
/// and the text passes through it unchanged.
#[derive(Clone, Default)]
pub struct Combiner {
    stages: Vec<Arc<dyn Detector>>,
}

impl Combiner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: Arc<dyn Detector>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn combine(&self, text: &str) -> FilterResult {
        if is_blank(text) {
            return FilterResult::clean(text);
        }

        let mut current = text.to_string();
        let mut detected = Vec::new();

        for stage in &self.stages {
            match stage.detect(&current) {
                Ok(detection) => {
                    debug!(
                        "Stage '{}' detected {} term(s)",
                        stage.name(),
                        detection.terms.len()
                    );
                    merge_unique(&mut detected, detection.terms);
                    current = detection.redacted;
                }
                Err(e) => {
                    warn!("Skipping detection stage '{}': {}", stage.name(), e);
                }
            }
        }

        FilterResult::new(text, current, detected)
    }
}
