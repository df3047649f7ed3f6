//! Process-wide cache of generated variations

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use tracing::debug;

use crate::matcher::WordMatcher;
use crate::variations::{self, VariationSet};

static GLOBAL: LazyLock<Arc<VariationCache>> = LazyLock::new(|| Arc::new(VariationCache::new()));

/// Variations of one canonical word and the matchers compiled from them
pub struct CompiledWord {
    pub variations: VariationSet,
    /// Matches the lowercase canonical word alone
    pub direct: WordMatcher,
    /// Matches any variation
    pub variants: WordMatcher,
}

impl CompiledWord {
    fn build(word: &str) -> Self {
        let variations = variations::generate(word);
        let direct = WordMatcher::new(&[variations.word()]);
        let variants = WordMatcher::new(variations.variants());
        Self {
            variations,
            direct,
            variants,
        }
    }
}

/// Map from lowercase canonical word -> compiled variations
///
/// Entries are built outside the map and published with an insert-if-absent,
/// so readers only ever see complete entries.
pub struct VariationCache {
    entries: DashMap<String, Arc<CompiledWord>>,
}

impl VariationCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Cache shared by every detector in the process
    pub fn global() -> Arc<VariationCache> {
        GLOBAL.clone()
    }

    pub fn get_or_generate(&self, word: &str) -> Arc<CompiledWord> {
        let key = word.to_lowercase();
        if let Some(entry) = self.entries.get(&key) {
            return entry.value().clone();
        }

        let compiled = Arc::new(CompiledWord::build(&key));
        debug!(
            "Generated {} variations for '{}'",
            compiled.variations.len(),
            key
        );
        self.entries.entry(key).or_insert(compiled).value().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }
}

impl Default for VariationCache {
    fn default() -> Self {
        Self::new()
    }
}
