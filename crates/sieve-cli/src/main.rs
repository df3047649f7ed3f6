mod cli;
mod commands;
mod input;

use anyhow::Result;
use clap::Parser;
use sieve_config::Config;

use commands::check::CheckArgs;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Check {
            text,
            file,
            mode,
            json,
            stats,
            no_truncate,
        } => commands::check::handle(
            CheckArgs {
                text,
                file,
                mode,
                json,
                stats,
                no_truncate,
            },
            &config,
        ),
        cli::Commands::Variations { word, limit, json } => {
            commands::variations::handle(word, limit, json)
        }
        cli::Commands::Words { contains } => commands::words::handle(contains, &config),
        cli::Commands::Samples { mode } => commands::samples::handle(mode, &config),
        cli::Commands::Config { path } => {
            commands::config::handle(path, &config, cli.config.as_deref())
        }
    }
}
