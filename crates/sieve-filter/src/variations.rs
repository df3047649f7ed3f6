//! Variation generator
//!
//! Expands one canonical word into the disguises that should be treated as
//! equivalent to it: case games, separators, leetspeak, homoglyphs,
//! typo-like noise and common affixes.
//!
//! Families are applied in a fixed order and the output is capped at
//! [`MAX_VARIATIONS`]. A family that would push the set over the cap is
//! skipped together with every family after it, so a given word always
//! yields the same set.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::tables::{
    self, HOMOGLYPHS, LEETSPEAK, NUMBER_MAP, SEPARATORS, is_false_positive,
};

/// Upper bound on the number of variations generated for one word
pub const MAX_VARIATIONS: usize = 400;

const PREFIXES: &[&str] = &["the"];
const SUFFIXES: &[&str] = &["s", "ed", "er", "ing"];

/// Shortest result kept by the omission family
const MIN_OMISSION_LEN: usize = 3;

type Family = fn(&str) -> Vec<String>;

/// Families applied after the case family, in order
const FAMILIES: &[(&str, Family)] = &[
    ("separators", separated),
    ("leetspeak", leetspeak),
    ("leetspeak_separators", leetspeak_separated),
    ("homoglyphs", homoglyphs),
    ("noise", noise),
    ("affixes", affixes),
];

/// Ordered disguises of one canonical word, including the word itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationSet {
    word: String,
    variants: Vec<String>,
}

impl VariationSet {
    /// Lowercase canonical word this set was generated from
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.variants.iter().any(|v| v == candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }
}

/// Generate the variation set for `word`
pub fn generate(word: &str) -> VariationSet {
    let lower = word.to_lowercase();
    let mut builder = Builder::default();

    if lower.is_empty() {
        return builder.finish(lower);
    }

    builder.push_all(case_variants(word, &lower));

    for (name, family) in FAMILIES {
        if !builder.try_family(family(&lower)) {
            debug!(
                "Variation cap reached for '{}' at family '{}' ({} variations)",
                lower,
                name,
                builder.variants.len()
            );
            break;
        }
    }

    builder.finish(lower)
}

#[derive(Default)]
struct Builder {
    seen: HashSet<String>,
    variants: Vec<String>,
}

impl Builder {
    fn admit(&self, candidate: &str) -> bool {
        !candidate.is_empty()
            && candidate.chars().any(char::is_alphabetic)
            && !is_false_positive(&candidate.to_lowercase())
            && !self.seen.contains(candidate)
    }

    fn push_all(&mut self, candidates: Vec<String>) {
        for candidate in candidates {
            if self.admit(&candidate) {
                self.seen.insert(candidate.clone());
                self.variants.push(candidate);
            }
        }
    }

    /// Add a whole family, or nothing if it would exceed the cap
    fn try_family(&mut self, candidates: Vec<String>) -> bool {
        let mut fresh: Vec<String> = Vec::new();
        for candidate in candidates {
            if self.admit(&candidate) && !fresh.contains(&candidate) {
                fresh.push(candidate);
            }
        }

        if self.variants.len() + fresh.len() > MAX_VARIATIONS {
            return false;
        }

        self.push_all(fresh);
        true
    }

    fn finish(self, word: String) -> VariationSet {
        VariationSet {
            word,
            variants: self.variants,
        }
    }
}

fn case_variants(word: &str, lower: &str) -> Vec<String> {
    vec![
        word.to_string(),
        lower.to_string(),
        lower.to_uppercase(),
        alternating_case(lower),
    ]
}

/// Even positions upper case, odd positions lower case
fn alternating_case(word: &str) -> String {
    word.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            if i % 2 == 0 {
                c.to_uppercase().collect::<Vec<_>>()
            } else {
                c.to_lowercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

fn join_with(word: &str, sep: char) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

fn separated(lower: &str) -> Vec<String> {
    let mixed = alternating_case(lower);
    SEPARATORS
        .iter()
        .flat_map(|sep| [join_with(lower, *sep), join_with(&mixed, *sep)])
        .collect()
}

/// One variant per substitute per letter class, plus the number word
fn leet_words(lower: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (letter, subs) in LEETSPEAK {
        if lower.contains(*letter) {
            for sub in *subs {
                out.push(lower.replace(*letter, &sub.to_string()));
            }
        }
    }

    let number_word: String = lower
        .chars()
        .map(|c| {
            NUMBER_MAP
                .iter()
                .find(|(letter, _)| *letter == c)
                .map_or(c, |(_, digit)| *digit)
        })
        .collect();
    if number_word != lower {
        out.push(number_word);
    }
    out
}

fn leetspeak(lower: &str) -> Vec<String> {
    leet_words(lower)
}

fn leetspeak_separated(lower: &str) -> Vec<String> {
    leet_words(lower)
        .iter()
        .flat_map(|leet| SEPARATORS[..3].iter().map(move |sep| join_with(leet, *sep)))
        .collect()
}

fn homoglyphs(lower: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (letter, lookalikes) in HOMOGLYPHS {
        if lower.contains(*letter) {
            for lookalike in *lookalikes {
                let swapped = lower.replace(*letter, &lookalike.to_string());
                for sep in &SEPARATORS[..2] {
                    out.push(join_with(&swapped, *sep));
                }
                out.push(swapped);
            }
        }
    }
    out.push(lower.chars().map(tables::full_width).collect());
    out
}

/// Doubled characters at every position, then interior omissions
fn noise(lower: &str) -> Vec<String> {
    let chars: Vec<char> = lower.chars().collect();
    let mut out = Vec::new();

    for i in 0..chars.len() {
        let mut repeated = chars.clone();
        repeated.insert(i, chars[i]);
        out.push(repeated.into_iter().collect());
    }

    if chars.len() > MIN_OMISSION_LEN {
        for i in 1..chars.len() - 1 {
            let mut omitted = chars.clone();
            omitted.remove(i);
            out.push(omitted.into_iter().collect());
        }
    }
    out
}

fn affixes(lower: &str) -> Vec<String> {
    PREFIXES
        .iter()
        .map(|prefix| format!("{prefix}{lower}"))
        .chain(SUFFIXES.iter().map(|suffix| format!("{lower}{suffix}")))
        .collect()
}
