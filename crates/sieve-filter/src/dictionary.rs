//! Dictionary of canonical words

use std::collections::HashSet;

use crate::tables::is_word_char;

const ENGLISH_WORDS: &str = include_str!("../data/words.txt");

/// Ordered canonical words, deduplicated by lowercase form
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Built-in English word list
    pub fn english() -> Self {
        Self::from_words(parse_word_list(ENGLISH_WORDS))
    }

    /// Build from any word source; blanks are dropped, first spelling wins
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Append words not already present
    pub fn with_words<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            self.insert(word.as_ref());
        }
        self
    }

    /// Remove words, compared case-insensitively
    pub fn without_words<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed: HashSet<String> = allowed
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .collect();
        self.words.retain(|w| !allowed.contains(&w.to_lowercase()));
        self.index.retain(|w| !allowed.contains(w));
        self
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        if self.index.insert(word.to_lowercase()) {
            self.words.push(word.to_string());
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// Fast pre-check: does any plain token of `text` spell a dictionary word
    ///
    /// Disguised spellings are not considered.
    pub fn is_profane(&self, text: &str) -> bool {
        text.split(|c: char| !is_word_char(c))
            .filter(|token| !token.is_empty())
            .any(|token| self.contains(token))
    }
}

/// Lines of a word list, skipping blanks and `#` comments
pub fn parse_word_list(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
