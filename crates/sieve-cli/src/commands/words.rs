//! Words command - inspect the effective dictionary

use anyhow::Result;
use sieve_config::Config;

pub fn handle(contains: Option<String>, config: &Config) -> Result<()> {
    let filter = super::build_filter(config)?;
    let dictionary = filter.dictionary().dictionary();

    if let Some(text) = contains {
        if dictionary.is_profane(&text) {
            println!("✗ Contains a dictionary word");
        } else {
            println!("✓ No dictionary word found");
        }
        return Ok(());
    }

    println!("Dictionary ({} words):", dictionary.len());
    for word in dictionary.words() {
        println!("  {}", word);
    }

    Ok(())
}
