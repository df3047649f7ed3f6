//! Boundary matcher
//!
//! A candidate is present in a text only where it is flanked by the start or
//! end of the text or by a non-word character, so "ass" is never found inside
//! "class" or "assessment". Matching is case-insensitive, candidates are taken
//! literally, and each character of a candidate also matches a run of itself
//! ("fuuuuck" is an occurrence of "fuck").
//!
//! Candidates carrying a non-space separator ("f-u-c-k", "f.u.c.k") are also
//! accepted as plain substrings, since they are unlikely to occur inside
//! unrelated words. Either way such an occurrence is dropped when the
//! spelled-out run carries on with more single letters: "s.h.i.t" is not
//! present in "s.h.i.t.e".

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::tables::{is_separator, is_word_char};

/// Anything that is not a letter, a number or `_`
const NON_WORD: &str = r"[^\p{Alphabetic}\p{N}_]";

const PATTERN_SIZE_LIMIT: usize = 1 << 24;

/// True when `candidate` occurs in `text` at a word boundary
pub fn exists(candidate: &str, text: &str) -> bool {
    WordMatcher::new(&[candidate]).is_match(text)
}

/// Matches any of a fixed list of candidates
pub struct WordMatcher {
    bounded: Search,
    loose: Option<Search>,
}

impl WordMatcher {
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> Self {
        let mut all: Vec<&str> = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| !c.is_empty())
            .collect();
        // longest first so an alternation prefers "fucking" over "fuck"
        all.sort_by_key(|c| std::cmp::Reverse(c.chars().count()));

        let loose: Vec<&str> = all
            .iter()
            .copied()
            .filter(|c| has_loose_separator(c))
            .collect();

        Self {
            bounded: Search::compile(&all, true),
            loose: (!loose.is_empty()).then(|| Search::compile(&loose, false)),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        let hit =
            self.bounded.is_match(text) || self.loose.as_ref().is_some_and(|s| s.is_match(text));
        hit && !self.find_spans(text).is_empty()
    }

    /// Byte spans of every occurrence, ordered and non-overlapping
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = self.bounded.spans(text);
        if let Some(loose) = &self.loose {
            spans.extend(loose.spans(text));
        }
        spans.retain(|span| !spelling_continues(text, span));
        spans.sort_by_key(|span| (span.start, std::cmp::Reverse(span.end)));

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last() {
                Some(last) if span.start < last.end => continue,
                _ => merged.push(span),
            }
        }
        merged
    }

    /// True when the compiled pattern was rejected and literal scanning is used
    pub fn is_fallback(&self) -> bool {
        matches!(self.bounded, Search::Manual { .. })
    }
}

fn has_loose_separator(candidate: &str) -> bool {
    candidate.chars().any(|c| c != ' ' && is_separator(c))
}

/// True when the separator of a spelled-out match is followed or preceded
/// by one more lone letter, as in "a.s.s.e.t" or "c.l.a.s.s"
fn spelling_continues(text: &str, span: &Range<usize>) -> bool {
    let Some(sep) = text[span.clone()]
        .chars()
        .find(|c| *c != ' ' && is_separator(*c))
    else {
        return false;
    };

    let after: Vec<char> = text[span.end..].chars().take(3).collect();
    let before: Vec<char> = text[..span.start].chars().rev().take(3).collect();
    lone_letter_after(&after, sep) || lone_letter_after(&before, sep)
}

fn lone_letter_after(chars: &[char], sep: char) -> bool {
    match chars {
        [first, letter, rest @ ..] => {
            *first == sep
                && is_word_char(*letter)
                && rest.first().is_none_or(|next| !is_word_char(*next))
        }
        _ => false,
    }
}

enum Search {
    Pattern { regex: Regex },
    Manual { candidates: Vec<String>, bounded: bool },
}

impl Search {
    fn compile(candidates: &[&str], bounded: bool) -> Self {
        if candidates.is_empty() {
            return Search::Manual {
                candidates: Vec::new(),
                bounded,
            };
        }

        match build_regex(candidates, bounded) {
            Ok(regex) => Search::Pattern { regex },
            Err(e) => {
                debug!(
                    "Falling back to literal matching for {} candidates: {}",
                    candidates.len(),
                    e
                );
                Search::Manual {
                    candidates: candidates.iter().map(|c| c.to_string()).collect(),
                    bounded,
                }
            }
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Search::Pattern { regex } => regex.is_match(text),
            Search::Manual { .. } => !self.spans(text).is_empty(),
        }
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Search::Pattern { regex } => {
                let mut spans = Vec::new();
                let mut pos = 0;
                while pos <= text.len() {
                    let Some(caps) = regex.captures_at(text, pos) else {
                        break;
                    };
                    let Some(word) = caps.get(1) else {
                        break;
                    };
                    if word.end() <= pos {
                        break;
                    }
                    spans.push(word.range());
                    // the trailing boundary may lead the next occurrence
                    pos = word.end();
                }
                spans
            }
            Search::Manual {
                candidates,
                bounded,
            } => {
                let mut spans: Vec<Range<usize>> = candidates
                    .iter()
                    .flat_map(|c| literal_spans(c, text, *bounded))
                    .collect();
                spans.sort_by_key(|span| span.start);
                spans
            }
        }
    }
}

fn build_regex(candidates: &[&str], bounded: bool) -> Result<Regex, regex::Error> {
    let alternation = candidates
        .iter()
        .map(|c| elongated(c))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = if bounded {
        format!("(?:^|{NON_WORD})({alternation})(?:{NON_WORD}|$)")
    } else {
        format!("({alternation})")
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}

/// Escape each character and let it repeat
fn elongated(candidate: &str) -> String {
    let mut buf = [0u8; 4];
    candidate
        .chars()
        .map(|c| format!("(?:{})+", regex::escape(c.encode_utf8(&mut buf))))
        .collect()
}

/// Case-insensitive literal scan with the boundary checked by hand
fn literal_spans(candidate: &str, text: &str, bounded: bool) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    if candidate.is_empty() {
        return spans;
    }

    let mut pos = 0;
    while pos < text.len() {
        if let Some(end) = literal_match_at(candidate, text, pos)
            && (!bounded || is_bounded(text, pos, end))
        {
            spans.push(pos..end);
            pos = end;
            continue;
        }
        pos += text[pos..].chars().next().map_or(1, char::len_utf8);
    }
    spans
}

/// End of `candidate` if it matches `text` at byte `start`
fn literal_match_at(candidate: &str, text: &str, start: usize) -> Option<usize> {
    let mut haystack = text[start..].char_indices();
    for expected in candidate.chars() {
        let (_, actual) = haystack.next()?;
        if !chars_eq_ignore_case(expected, actual) {
            return None;
        }
    }
    Some(haystack.next().map_or(text.len(), |(i, _)| start + i))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
