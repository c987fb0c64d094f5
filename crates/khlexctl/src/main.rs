//! khlexctl - terminal viewer and CLI for the Khmer tech lexicon.
//!
//! Loads three static JSON documents (terms, categories, site metadata) and
//! serves them through a searchable full-screen viewer or one-shot commands.

use anyhow::Result;
use clap::Parser;
use khlexctl::cli::{Cli, Commands};
use khlexctl::loader::LexiconSource;
use khlexctl::{commands, tui};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr: the viewer owns the terminal screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = LexiconSource::parse(&cli.source);

    match cli.command {
        Some(Commands::Search { query, category, json }) => {
            commands::search(&source, &query, category, json).await
        }
        Some(Commands::Categories { json }) => commands::categories(&source, json).await,
        Some(Commands::Export { output }) => commands::export(&source, output).await,
        None => tui::run(source).await,
    }
}
