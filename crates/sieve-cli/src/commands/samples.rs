//! Samples command - run the built-in sample texts through the filter

use anyhow::Result;
use sieve_config::Config;

use super::check::{print_result, run};
use crate::cli::Mode;

/// Clean sentences followed by increasingly disguised spellings
pub const SAMPLE_TEXTS: &[&str] = &[
    "This is a clean text with no bad words.",
    "Hello world, this is a test message.",
    "I'm feeling great today!",
    "This text contains some inappropriate language that should be filtered.",
    "What the hell is going on here?",
    "That's absolutely fantastic!",
    "I can't believe this is happening.",
    "This is a test of various expressions and words.",
    "This text has f-u-c-k in it to test hyphenated detection.",
    "Testing spaced version: f u c k",
    "Testing mixed case: F-u-C-k",
    "Testing leetspeak: f-4-c-k",
    "Advanced obfuscation: f.u.c.k with dots",
    "Unicode test: fаck (using Cyrillic 'а')",
    "Symbol test: f@ck with @ symbol",
    "Number insertion: f1u2c3k",
    "Character repetition: fuuuuck",
    "Character omission: fck (missing 'u')",
    "Character addition: fucck (extra 'c')",
    "Character swap: fukc (swapped 'c' and 'k')",
    "Mixed separators: f_u.c-k",
    "Leetspeak with symbols: f4ck",
    "Unicode full width: ｆｕｃｋ",
    "With prefixes/suffixes: thefucking",
    "Complex mix: F-u-4-c-k",
];

pub fn handle(mode: Option<Mode>, config: &Config) -> Result<()> {
    let filter = super::build_filter(config)?;
    let modes: Vec<Mode> = match mode {
        Some(mode) => vec![mode],
        None => Mode::ALL.to_vec(),
    };

    for (i, text) in SAMPLE_TEXTS.iter().enumerate() {
        println!("Sample {}: {}", i + 1, text);
        for mode in &modes {
            let result = run(&filter, *mode, text);
            println!("  [{}]", mode.label());
            print_result(&result, "    ");
        }
        println!();
    }

    Ok(())
}
