//! Check command - filter one piece of text

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use sieve_config::Config;
use sieve_core::FilterResult;
use sieve_filter::ProfanityFilter;
use tracing::debug;

use crate::cli::Mode;
use crate::input;

pub struct CheckArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub mode: Mode,
    pub json: bool,
    pub stats: bool,
    pub no_truncate: bool,
}

/// Processing statistics for one check
#[derive(Debug, Serialize)]
pub struct Stats {
    pub mode: Mode,
    pub total_variations: usize,
    pub elapsed_ms: u128,
    pub text_length: usize,
    pub truncated: bool,
}

pub fn handle(args: CheckArgs, config: &Config) -> Result<()> {
    let raw = read_input(args.text, args.file)?;
    input::validate(&raw, &config.limits)?;

    let truncate = config.limits.truncate && !args.no_truncate;
    let truncated = truncate && raw.chars().count() > config.limits.truncate_chars;
    let text = if truncated {
        input::truncate(&raw, config.limits.truncate_chars, &config.limits.ellipsis)
    } else {
        raw
    };

    let filter = super::build_filter(config)?;

    let started = Instant::now();
    let result = run(&filter, args.mode, &text);
    let elapsed_ms = started.elapsed().as_millis();
    debug!("Checked {} chars in {} ms", text.chars().count(), elapsed_ms);

    let stats = args.stats.then(|| Stats {
        mode: args.mode,
        total_variations: filter.dictionary().total_variations(),
        elapsed_ms,
        text_length: text.chars().count(),
        truncated,
    });

    if args.json {
        let output = match &stats {
            Some(stats) => serde_json::json!({ "result": result, "stats": stats }),
            None => serde_json::to_value(&result)?,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_result(&result, "");
    if let Some(stats) = stats {
        println!();
        println!("Stats ({}):", stats.mode.label());
        println!("  Variations: {}", stats.total_variations);
        println!("  Elapsed: {} ms", stats.elapsed_ms);
        println!("  Text length: {}", stats.text_length);
        if stats.truncated {
            println!("  Input truncated to {} chars", config.limits.truncate_chars);
        }
    }

    Ok(())
}

pub fn run(filter: &ProfanityFilter, mode: Mode, text: &str) -> FilterResult {
    match mode {
        Mode::Combined => filter.detect_and_redact(text),
        Mode::Dictionary => filter.detect_only(text),
        Mode::Phrases => filter.secondary_only(text),
    }
}

pub fn print_result(result: &FilterResult, indent: &str) {
    println!("{}{}", indent, result.filtered);
    if result.is_clean {
        println!("{}✓ Clean", indent);
    } else {
        println!(
            "{}✗ Detected {}: {}",
            indent,
            result.detection_count(),
            result.detected_words.join(", ")
        );
    }
}

fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e));
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_modes() {
        let filter = ProfanityFilter::new();
        let text = "shit, what the hell";

        assert_eq!(run(&filter, Mode::Dictionary, text).detected_words, vec!["shit"]);
        assert_eq!(
            run(&filter, Mode::Phrases, text).detected_words,
            vec!["shit", "hell"]
        );
        assert_eq!(
            run(&filter, Mode::Combined, text).filtered,
            "****, what the ****"
        );
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "f u c k\n").unwrap();

        assert_eq!(read_input(None, Some(path)).unwrap(), "f u c k\n");
        assert_eq!(read_input(Some("text".to_string()), None).unwrap(), "text");
        assert!(read_input(None, Some(dir.path().join("missing"))).is_err());
    }
}
