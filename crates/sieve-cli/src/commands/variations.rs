//! Variations command - show the disguises generated for a word

use anyhow::Result;
use sieve_core::Error;
use sieve_filter::{MAX_VARIATIONS, generate};

pub fn handle(word: String, limit: Option<usize>, json: bool) -> Result<()> {
    let word = word.trim();
    if word.is_empty() {
        return Err(Error::InvalidInput("word must not be empty".to_string()).into());
    }

    let set = generate(word);
    if json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(());
    }

    let shown = limit.unwrap_or(set.len()).min(set.len());
    println!(
        "Variations for '{}' ({} of at most {}):",
        set.word(),
        set.len(),
        MAX_VARIATIONS
    );
    for variant in set.iter().take(shown) {
        println!("  {}", variant);
    }
    if shown < set.len() {
        println!("  ... {} more", set.len() - shown);
    }

    Ok(())
}
