//! Canonical terms for phrase matches
//!
//! The censor engine says *that* a token is inappropriate, not *which* word it
//! stands for. A flagged token is mapped back to a term by undoing the
//! disguises the variation generator knows about (leetspeak, lookalikes,
//! separators, repeated letters) and looking for a known term in what is left.

use crate::tables::{LEETSPEAK, is_separator, resolve_confusable};

/// Terms reported by the phrase stage when a flagged token spells one of them
pub const ENGLISH: &[&str] = &[
    "arse", "ass", "asshole", "bastard", "bitch", "bollocks", "boob", "bullshit", "cock",
    "cocksucker", "crap", "cum", "cunt", "damn", "dick", "dickhead", "dildo", "fag", "faggot",
    "fuck", "goddamn", "hell", "jackass", "jizz", "motherfucker", "nigger", "piss", "porn",
    "pussy", "retard", "shit", "slut", "tit", "twat", "wank", "wanker", "whore",
];

/// Index of the term `token` spells, preferring the longest term
pub fn resolve<S: AsRef<str>>(token: &str, terms: &[S]) -> Option<usize> {
    let letters = collapse(
        token
            .chars()
            .filter(|c| !c.is_whitespace() && !is_separator(*c))
            .flat_map(char::to_lowercase),
    );
    if letters.is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    for (index, term) in terms.iter().enumerate() {
        let term = collapse(term.as_ref().chars().flat_map(char::to_lowercase));
        if term.is_empty() || term.len() > letters.len() {
            continue;
        }
        if best.is_some_and(|(_, len)| len >= term.len()) {
            continue;
        }

        let found = letters
            .windows(term.len())
            .any(|window| window.iter().zip(&term).all(|(c, l)| stands_for(*c, *l)));
        if found {
            best = Some((index, term.len()));
        }
    }
    best.map(|(index, _)| index)
}

/// Drop repeats of the same character
fn collapse(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in chars {
        if out.last() != Some(&c) {
            out.push(c);
        }
    }
    out
}

fn stands_for(c: char, letter: char) -> bool {
    c == letter
        || resolve_confusable(c) == Some(letter)
        || LEETSPEAK
            .iter()
            .any(|(l, subs)| *l == letter && subs.contains(&c))
}
