//! Config command - show the effective configuration

use std::path::Path;

use anyhow::Result;
use sieve_config::Config;

pub fn handle(path_only: bool, config: &Config, explicit: Option<&Path>) -> Result<()> {
    let path = explicit.map_or_else(Config::config_path, Path::to_path_buf);

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
