//! Core domain models for sieve
//!
//! This crate contains:
//! - Domain models (FilterResult, Detection, PhraseMatch)
//! - The seams between detection engines (Detector, PhraseMatcher)
//! - The shared error type

pub mod detector;
pub mod error;
pub mod phrase;
pub mod result;

pub use detector::{Detection, Detector};
pub use error::{Error, Result};
pub use phrase::{PhraseMatch, PhraseMatcher, PhraseMetadata, UNKNOWN_PHRASE};
pub use result::{FilterResult, is_blank, merge_unique};
