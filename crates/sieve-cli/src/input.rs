//! Input checks applied before text reaches the filter

use std::sync::LazyLock;

use regex::Regex;
use sieve_config::LimitsConfig;
use sieve_core::{Error, Result};

static MARKUP: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        ("script block", Regex::new(r"(?i)<\s*script\b").unwrap()),
        ("javascript: URI", Regex::new(r"(?i)javascript\s*:").unwrap()),
        (
            "inline event handler",
            Regex::new(r"(?i)<[^>]*\bon[a-z]+\s*=").unwrap(),
        ),
    ]
});

/// Reject oversized input and executable markup
pub fn validate(text: &str, limits: &LimitsConfig) -> Result<()> {
    let len = text.chars().count();
    if len > limits.max_input_chars {
        return Err(Error::InputTooLarge {
            len,
            max: limits.max_input_chars,
        });
    }

    if let Some((kind, _)) = MARKUP.iter().find(|(_, pattern)| pattern.is_match(text)) {
        return Err(Error::DisallowedMarkup(kind.to_string()));
    }

    Ok(())
}

/// Cut `text` to `max_chars` characters and mark the cut
pub fn truncate(text: &str, max_chars: usize, ellipsis: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ellipsis),
        None => text.to_string(),
    }
}
