use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "sieve")]
#[command(about = "Obfuscation-resistant profanity filter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "SIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect and redact profanity in text
    Check {
        /// Text to check (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Which stages to run
        #[arg(long, value_enum, default_value = "combined")]
        mode: Mode,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Show processing statistics
        #[arg(long)]
        stats: bool,

        /// Process the whole input instead of truncating it
        #[arg(long)]
        no_truncate: bool,
    },

    /// Show the disguises generated for a word
    Variations {
        word: String,

        /// Show at most this many variations
        #[arg(long)]
        limit: Option<usize>,

        /// Print the full set as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the dictionary, or check text against it word by word
    Words {
        /// Report whether any plain word of TEXT is in the dictionary
        #[arg(long)]
        contains: Option<String>,
    },

    /// Run the built-in sample texts
    Samples {
        /// Run only this mode (default: all three)
        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Show the effective configuration
    Config {
        /// Print the config file path only
        #[arg(long)]
        path: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Dictionary detector followed by the phrase matcher
    Combined,
    /// Dictionary detector only
    Dictionary,
    /// Phrase matcher only
    Phrases,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Combined, Mode::Dictionary, Mode::Phrases];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Combined => "combined",
            Mode::Dictionary => "dictionary",
            Mode::Phrases => "phrases",
        }
    }
}
