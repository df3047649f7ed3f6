//! Static substitution tables
//!
//! Everything here is immutable process-wide data. Only the variation cache
//! derived from these tables needs synchronization.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Canonical words shorter than this (separators ignored) are never matched
pub const MIN_WORD_LEN: usize = 3;

/// Characters a disguise may put between letters, in generation order
pub const SEPARATORS: &[char] = &['-', ' ', '.', '_', '|', '/'];

/// Letter -> lookalike digits and symbols, in generation order
pub const LEETSPEAK: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('b', &['8', '6']),
    ('c', &['(']),
    ('e', &['3']),
    ('g', &['9', '6']),
    ('i', &['1', '!', 'l']),
    ('l', &['1']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7']),
    ('u', &['v', '4']),
    ('z', &['2']),
];

/// Substitutions applied all at once to build the "number word"
pub const NUMBER_MAP: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Letter -> Cyrillic/Greek lookalikes
pub const HOMOGLYPHS: &[(char, &[char])] = &[
    ('a', &['а', 'α']),
    ('c', &['с']),
    ('e', &['е', 'ε']),
    ('h', &['һ']),
    ('i', &['і', 'ι']),
    ('k', &['κ']),
    ('o', &['о', 'ο']),
    ('p', &['р', 'ρ']),
    ('s', &['ѕ']),
    ('t', &['т', 'τ']),
    ('u', &['υ']),
    ('x', &['х', 'χ']),
    ('y', &['у']),
];

/// Common words that a canonical entry or a generated variation must never be
static FALSE_POSITIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "this", "test", "sex", "six",
        // one-letter omissions of dictionary words
        "are", "ase", "bob", "cap", "cnt", "cut", "dan", "dido", "douce", "hit", "niger",
        "sit", "tat", "waker", "wore",
        // inflections of dictionary words with an innocent reading
        "cocked", "cocker", "cocking", "craps", "damning", "dicker", "titer",
    ]
    .into_iter()
    .collect()
});

pub fn is_false_positive(word: &str) -> bool {
    FALSE_POSITIVES.contains(word)
}

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Letters, digits and `_`; everything else is a word boundary
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Length of a word with its separators stripped
pub fn effective_len(word: &str) -> usize {
    word.chars().filter(|c| !is_separator(*c)).count()
}

/// Full-width form of an ASCII letter or digit
pub fn full_width(c: char) -> char {
    let code = match c {
        'a'..='z' => 0xFF41 + (c as u32 - 'a' as u32),
        'A'..='Z' => 0xFF21 + (c as u32 - 'A' as u32),
        '0'..='9' => 0xFF10 + (c as u32 - '0' as u32),
        _ => return c,
    };
    char::from_u32(code).unwrap_or(c)
}

/// ASCII letter a Cyrillic, Greek or full-width lookalike stands for
pub fn resolve_confusable(c: char) -> Option<char> {
    let code = c as u32;
    if (0xFF41..=0xFF5A).contains(&code) {
        return char::from_u32(code - 0xFF41 + 'a' as u32);
    }
    if (0xFF21..=0xFF3A).contains(&code) {
        return char::from_u32(code - 0xFF21 + 'a' as u32);
    }
    if (0xFF10..=0xFF19).contains(&code) {
        return char::from_u32(code - 0xFF10 + '0' as u32);
    }
    let lower = c.to_lowercase().next().unwrap_or(c);
    HOMOGLYPHS
        .iter()
        .find(|(_, lookalikes)| lookalikes.contains(&lower))
        .map(|(letter, _)| *letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_len_ignores_separators() {
        assert_eq!(effective_len("f-u-c-k"), 4);
        assert_eq!(effective_len("a s"), 2);
        assert_eq!(effective_len("camel jockey"), 11);
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('а'));
        assert!(!is_word_char('*'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('-'));
    }

    #[test]
    fn test_full_width_round_trip() {
        for c in ['a', 'k', 'z', 'A', '5'] {
            let wide = full_width(c);
            assert_ne!(wide, c);
            assert_eq!(
                resolve_confusable(wide),
                Some(c.to_ascii_lowercase())
            );
        }
        assert_eq!(full_width('-'), '-');
    }

    #[test]
    fn test_resolve_homoglyphs() {
        assert_eq!(resolve_confusable('а'), Some('a'));
        assert_eq!(resolve_confusable('ο'), Some('o'));
        assert_eq!(resolve_confusable('x'), None);
    }

    #[test]
    fn test_false_positive_lookup() {
        assert!(is_false_positive("this"));
        assert!(is_false_positive("sit"));
        assert!(is_false_positive("damning"));
        assert!(!is_false_positive("fuck"));
    }
}
