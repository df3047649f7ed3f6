//! Obfuscation-resistant profanity detection for sieve
//!
//! This crate contains:
//! - The variation generator and its process-wide cache
//! - The boundary matcher and the dictionary detector/redactor
//! - A `rustrict`-backed phrase matcher used as the secondary stage
//! - The combiner and the [`ProfanityFilter`] facade
//!
//! ```
//! use sieve_filter::ProfanityFilter;
//!
//! let filter = ProfanityFilter::new();
//! let result = filter.detect_and_redact("What the f-u-c-k");
//! assert_eq!(result.filtered, "What the ****");
//! assert_eq!(result.detected_words, vec!["fuck"]);
//! ```

pub mod cache;
pub mod combiner;
pub mod detector;
pub mod dictionary;
pub mod filter;
pub mod matcher;
pub mod phrases;
pub mod tables;
pub mod variations;

pub use cache::{CompiledWord, VariationCache};
pub use combiner::Combiner;
pub use detector::{DEFAULT_MASK, DictionaryDetector};
pub use dictionary::Dictionary;
pub use filter::{FilterOptions, ProfanityFilter};
pub use matcher::{WordMatcher, exists};
pub use phrases::{CensorMatcher, PhraseDetector};
pub use variations::{MAX_VARIATIONS, VariationSet, generate};
