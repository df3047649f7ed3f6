//! Phrase matcher backed by the `rustrict` censor
//!
//! `rustrict` carries its own curated dataset and undoes lookalikes and
//! leetspeak before matching. Candidate tokens are analyzed one at a time so
//! every match has a span, and each match is named by the term its token
//! spells (see [`terms`](super::terms)).

use std::collections::HashSet;
use std::ops::Range;

use rustrict::{Censor, Type};
use sieve_core::{Error, PhraseMatch, PhraseMatcher, PhraseMetadata, Result, is_blank};
use tracing::debug;

use super::terms;

/// Character written over censored characters
pub const CENSOR_CHAR: char = '*';

/// Phrase id of a match whose token spells no known term
const UNRESOLVED: usize = usize::MAX;

/// Leet symbols kept at the start of a token ("$hit", "@ss")
const LEADING_SYMBOLS: &[char] = &['$', '@'];

/// Everything inappropriate, plus mild profanity such as "hell"
pub fn default_threshold() -> Type {
    Type::INAPPROPRIATE | (Type::PROFANE & Type::MILD_OR_HIGHER)
}

pub struct CensorMatcher {
    threshold: Type,
    replacement: char,
    terms: Vec<String>,
    allowed: HashSet<String>,
}

impl CensorMatcher {
    pub fn new() -> Self {
        Self {
            threshold: default_threshold(),
            replacement: CENSOR_CHAR,
            terms: terms::ENGLISH.iter().map(|t| t.to_string()).collect(),
            allowed: HashSet::new(),
        }
    }

    /// Only report content at or above this severity
    pub fn with_threshold(mut self, threshold: Type) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_replacement(mut self, replacement: char) -> Self {
        self.replacement = replacement;
        self
    }

    /// Extend the terms matches are named by
    pub fn with_terms<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in extra {
            let term = term.as_ref().trim();
            if !term.is_empty() && !self.terms.iter().any(|t| t.eq_ignore_ascii_case(term)) {
                self.terms.push(term.to_string());
            }
        }
        self
    }

    /// Never report matches that spell one of these words
    pub fn without_words<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed
            .extend(allowed.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    fn flags(&self, text: &str) -> bool {
        Censor::from_str(text).analyze().is(self.threshold)
    }

    fn censor(&self, text: &str) -> String {
        Censor::from_str(text)
            .with_censor_threshold(self.threshold)
            .with_censor_first_character_threshold(self.threshold)
            .with_censor_replacement(self.replacement)
            .censor()
    }

    /// Censor one matched span, masking all of it if the engine leaves it be
    fn censor_span(&self, span: &str) -> String {
        let censored = self.censor(span);
        if censored.contains(self.replacement)
            && censored.chars().count() == span.chars().count()
        {
            return censored;
        }
        span.chars()
            .map(|c| if c.is_whitespace() { c } else { self.replacement })
            .collect()
    }

    fn find(&self, text: &str) -> Vec<PhraseMatch> {
        candidates(text)
            .into_iter()
            .filter(|span| self.flags(&text[span.clone()]))
            .filter_map(|span| {
                let phrase_id = match terms::resolve(&text[span.clone()], &self.terms) {
                    Some(index) if self.allowed.contains(&self.terms[index].to_lowercase()) => {
                        debug!("Ignoring allowed term '{}'", self.terms[index]);
                        return None;
                    }
                    Some(index) => index,
                    None => UNRESOLVED,
                };
                Some(PhraseMatch {
                    phrase_id,
                    start: span.start,
                    end: span.end,
                })
            })
            .collect()
    }
}

impl Default for CensorMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseMatcher for CensorMatcher {
    fn has_match(&self, text: &str) -> Result<bool> {
        Ok(!is_blank(text) && self.flags(text))
    }

    /// Candidate tokens never overlap, so every match is disjoint either way
    fn get_all_matches(&self, text: &str, _include_overlaps: bool) -> Result<Vec<PhraseMatch>> {
        Ok(self.find(text))
    }

    fn apply_to(&self, text: &str, matches: &[PhraseMatch]) -> Result<String> {
        for m in matches {
            if m.start > m.end
                || m.end > text.len()
                || !text.is_char_boundary(m.start)
                || !text.is_char_boundary(m.end)
            {
                return Err(Error::Secondary(format!(
                    "match {}..{} is not a valid span of the text",
                    m.start, m.end
                )));
            }
        }

        let mut ordered: Vec<&PhraseMatch> = matches.iter().collect();
        ordered.sort_by_key(|m| (m.start, std::cmp::Reverse(m.end)));

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in ordered {
            if m.start < last {
                continue;
            }
            out.push_str(&text[last..m.start]);
            out.push_str(&self.censor_span(&text[m.start..m.end]));
            last = m.end;
        }
        out.push_str(&text[last..]);
        Ok(out)
    }

    fn phrase_metadata(&self, m: &PhraseMatch) -> Option<PhraseMetadata> {
        self.terms.get(m.phrase_id).map(|term| PhraseMetadata {
            original_word: term.clone(),
        })
    }
}

/// Byte spans worth asking the engine about
///
/// A candidate is a whitespace-delimited token with punctuation trimmed from
/// both ends. A run of one-character tokens ("f u c k") is one candidate.
/// Tokens without a letter are skipped, so plain numbers are never censored.
fn candidates(text: &str) -> Vec<Range<usize>> {
    let mut tokens: Vec<Range<usize>> = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                tokens.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(s..text.len());
    }

    let tokens: Vec<Range<usize>> = tokens
        .into_iter()
        .filter_map(|token| trim(text, token))
        .collect();

    let single = |token: &Range<usize>| text[token.clone()].chars().count() == 1;
    let mut spans = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let mut j = i;
        while j + 1 < tokens.len() && single(&tokens[j]) && single(&tokens[j + 1]) {
            j += 1;
        }
        spans.push(tokens[i].start..tokens[j].end);
        i = j + 1;
    }

    spans.retain(|span| text[span.clone()].chars().any(char::is_alphabetic));
    spans
}

fn trim(text: &str, token: Range<usize>) -> Option<Range<usize>> {
    let slice = &text[token.clone()];
    let lead = slice.find(|c: char| c.is_alphanumeric() || LEADING_SYMBOLS.contains(&c))?;
    let tail = slice.rfind(char::is_alphanumeric)?;
    let end = tail + slice[tail..].chars().next().map_or(0, char::len_utf8);
    (lead < end).then(|| token.start + lead..token.start + end)
}
