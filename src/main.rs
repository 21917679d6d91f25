use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use moviedb::cli::{normalize_args, Args, CLI};
use moviedb::DatabaseHandler;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moviedb=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse_from(normalize_args(std::env::args()));
    let config = args.config();

    let handler = DatabaseHandler::load(&config).with_context(|| {
        format!(
            "Failed to load the database from {}",
            config.movies_path.display()
        )
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut cli = CLI::new(handler, stdin.lock(), stdout.lock());
    cli.execute(&args.command)
        .context("failed to write to standard output")?;
    Ok(())
}
