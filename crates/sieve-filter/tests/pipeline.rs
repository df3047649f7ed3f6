use std::sync::Arc;

use sieve_core::{Error, PhraseMatch, PhraseMatcher, PhraseMetadata, Result};
use sieve_filter::{Dictionary, MAX_VARIATIONS, ProfanityFilter, generate};

struct FailingMatcher;

impl PhraseMatcher for FailingMatcher {
    fn has_match(&self, _text: &str) -> Result<bool> {
        Err(Error::Secondary("matcher offline".to_string()))
    }

    fn get_all_matches(&self, _text: &str, _include_overlaps: bool) -> Result<Vec<PhraseMatch>> {
        Err(Error::Secondary("matcher offline".to_string()))
    }

    fn apply_to(&self, _text: &str, _matches: &[PhraseMatch]) -> Result<String> {
        Err(Error::Secondary("matcher offline".to_string()))
    }

    fn phrase_metadata(&self, _m: &PhraseMatch) -> Option<PhraseMetadata> {
        None
    }
}

/// Matcher whose matches carry no metadata
struct AnonymousMatcher;

impl PhraseMatcher for AnonymousMatcher {
    fn has_match(&self, text: &str) -> Result<bool> {
        Ok(text.contains("heck"))
    }

    fn get_all_matches(&self, text: &str, _include_overlaps: bool) -> Result<Vec<PhraseMatch>> {
        Ok(text
            .match_indices("heck")
            .map(|(start, m)| PhraseMatch {
                phrase_id: 0,
                start,
                end: start + m.len(),
            })
            .collect())
    }

    fn apply_to(&self, text: &str, matches: &[PhraseMatch]) -> Result<String> {
        let mut out = text.to_string();
        for m in matches.iter().rev() {
            out.replace_range(m.start..m.end, "****");
        }
        Ok(out)
    }

    fn phrase_metadata(&self, _m: &PhraseMatch) -> Option<PhraseMetadata> {
        None
    }
}

#[test]
fn test_innocent_words_containing_ass() {
    let filter = ProfanityFilter::new();

    for text in ["assessment", "class", "lass", "assess", "a classic grass bass"] {
        let result = filter.detect_and_redact(text);
        assert!(!result.detected_words.contains(&"ass".to_string()), "{text}");
        assert_eq!(result.filtered, text);
        assert!(result.is_clean, "{text}");
    }
}

#[test]
fn test_common_words_near_dictionary_entries() {
    let filter = ProfanityFilter::new();

    for text in ["a damning report", "ASE cert", "cnt of rows", "haggle and dicker", "it was douce"] {
        let result = filter.detect_only(text);
        assert!(result.is_clean, "{text}: {:?}", result.detected_words);
        assert_eq!(result.filtered, text);
    }
}

#[test]
fn test_dotted_spellings_mask_whole_words_only() {
    let filter = ProfanityFilter::new();

    for text in ["s.h.i.t.e", "a.s.s.e.t", "c.l.a.s.s"] {
        let result = filter.detect_only(text);
        assert!(result.is_clean, "{text}: {:?}", result.detected_words);
        assert_eq!(result.filtered, text);
    }

    let result = filter.detect_only("s.h.i.t. happens");
    assert_eq!(result.detected_words, vec!["shit"]);
    assert_eq!(result.filtered, "****. happens");
}

#[test]
fn test_disguised_spellings_are_detected() {
    let filter = ProfanityFilter::new();

    for text in ["f-u-c-k", "f u c k", "f.u.c.k", "f4ck", "F-u-C-k", "fuuuuck"] {
        let result = filter.detect_only(text);
        assert_eq!(result.detected_words, vec!["fuck"], "{text}");
        assert_eq!(result.filtered, "****", "{text}");
    }
}

#[test]
fn test_disguises_inside_sentences() {
    let filter = ProfanityFilter::new();

    let result = filter.detect_and_redact("This text has f-u-c-k in it to test hyphenated detection.");
    assert_eq!(result.detected_words, vec!["fuck"]);
    assert_eq!(
        result.filtered,
        "This text has **** in it to test hyphenated detection."
    );

    let result = filter.detect_and_redact("Testing leetspeak: f-4-c-k");
    assert_eq!(result.filtered, "Testing leetspeak: ****");

    let result = filter.detect_and_redact("Unicode full width: ｆｕｃｋ");
    assert_eq!(result.detected_words, vec!["fuck"]);
    assert_eq!(result.filtered, "Unicode full width: ****");
}

#[test]
fn test_mask_length_follows_canonical_word() {
    let filter = ProfanityFilter::new();

    // the disguise is longer than the word, the mask is not
    let result = filter.detect_only("you b-i-t-c-h");
    assert_eq!(result.filtered, "you *****");

    let result = filter.detect_only("what a biiiitch");
    assert_eq!(result.filtered, "what a *****");
}

#[test]
fn test_redaction_is_idempotent() {
    let filter = ProfanityFilter::new();

    for text in [
        "shit fuck shit",
        "xf-u-c-kass",
        "You're a b1tch and an a55hole!",
        "This is a clean text with no bad words.",
        "sh!t, (crap) ... d-a-m-n",
    ] {
        let once = filter.dictionary().redact(text);
        let twice = filter.dictionary().redact(&once);
        assert_eq!(once, twice, "{text}");
    }
}

#[test]
fn test_blank_input_is_clean() {
    let filter = ProfanityFilter::new();

    for text in ["", "   ", "\n\t "] {
        for result in [
            filter.detect_and_redact(text),
            filter.detect_only(text),
            filter.secondary_only(text),
        ] {
            assert!(result.is_clean);
            assert!(result.detected_words.is_empty());
            assert_eq!(result.filtered, text);
            assert_eq!(result.original, text);
        }
    }
}

#[test]
fn test_case_insensitive() {
    let filter = ProfanityFilter::new();

    for text in ["shit", "SHIT", "Shit", "sHiT"] {
        let result = filter.detect_only(text);
        assert_eq!(result.detected_words, vec!["shit"], "{text}");
        assert_eq!(result.filtered, "****");
    }
}

#[test]
fn test_union_of_both_stages() {
    let filter = ProfanityFilter::new();

    let result = filter.detect_and_redact("shit, what the hell. shit!");
    assert_eq!(result.detected_words, vec!["shit", "hell"]);
    assert_eq!(result.filtered, "****, what the ****. ****!");

    // both stages know the word, it is reported once
    let result = filter.detect_and_redact("fuck");
    assert_eq!(result.detected_words, vec!["fuck"]);
}

#[test]
fn test_phrase_stage_catches_what_the_dictionary_misses() {
    let filter = ProfanityFilter::new();

    let result = filter.detect_and_redact("What the hell is going on here?");
    assert_eq!(result.detected_words, vec!["hell"]);
    assert_eq!(result.filtered, "What the **** is going on here?");
    assert!(!result.is_clean);

    let dictionary_only = filter.detect_only("What the hell is going on here?");
    assert!(dictionary_only.is_clean);
}

#[test]
fn test_clean_sentences_pass_through() {
    let filter = ProfanityFilter::new();

    for text in [
        "This is a clean text with no bad words.",
        "Hello world, this is a test message.",
        "I'm feeling great today!",
        "That's absolutely fantastic!",
        "I can't believe this is happening.",
        "This is a test of various expressions and words.",
    ] {
        let result = filter.detect_and_redact(text);
        assert!(result.is_clean, "{text}: {:?}", result.detected_words);
        assert_eq!(result.filtered, text);
    }
}

#[test]
fn test_failing_phrase_matcher_degrades_to_dictionary() {
    let filter = ProfanityFilter::new().with_phrase_matcher(Arc::new(FailingMatcher));
    let text = "shit, what the hell";

    let result = filter.detect_and_redact(text);
    assert_eq!(result, filter.detect_only(text));
    assert_eq!(result.detected_words, vec!["shit"]);
    assert_eq!(result.filtered, "****, what the hell");

    let secondary = filter.secondary_only(text);
    assert!(secondary.is_clean);
    assert_eq!(secondary.filtered, text);
}

#[test]
fn test_missing_metadata_reports_unknown() {
    let filter = ProfanityFilter::new().with_phrase_matcher(Arc::new(AnonymousMatcher));

    let result = filter.detect_and_redact("oh heck");
    assert_eq!(result.detected_words, vec!["unknown"]);
    assert_eq!(result.filtered, "oh ****");
}

#[test]
fn test_variation_cap_over_dictionary() {
    for word in Dictionary::english().words() {
        let set = generate(word);
        assert!(set.len() <= MAX_VARIATIONS, "{word}");
        assert_eq!(set, generate(word));
    }

    let worst = "abcegilostuzhkpxy".repeat(8);
    assert!(generate(&worst).len() <= MAX_VARIATIONS);
}

#[test]
fn test_shared_filter_across_threads() {
    let filter = Arc::new(ProfanityFilter::new());
    let expected = filter.detect_and_redact("f.u.c.k this sh1t");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let filter = filter.clone();
            std::thread::spawn(move || filter.detect_and_redact("f.u.c.k this sh1t"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(expected.filtered, "**** this ****");
}
