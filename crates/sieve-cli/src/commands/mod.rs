pub mod check;
pub mod config;
pub mod samples;
pub mod variations;
pub mod words;

use anyhow::Result;
use sieve_config::Config;
use sieve_filter::ProfanityFilter;

/// Build the filter described by the `[filter]` config section
pub fn build_filter(config: &Config) -> Result<ProfanityFilter> {
    Ok(ProfanityFilter::with_options(&config.filter.options())?)
}
