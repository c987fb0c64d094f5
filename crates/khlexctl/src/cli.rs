//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Version is embedded at build time
pub const VERSION: &str = env!("KHLEX_VERSION");

/// Default location of the published lexicon documents.
pub const DEFAULT_SOURCE: &str = "https://khmertechlexicon.github.io/data";

/// Khmer tech lexicon CLI
#[derive(Parser)]
#[command(name = "khlexctl")]
#[command(about = "Khmer tech lexicon - searchable bilingual glossary", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Lexicon source: base URL or local directory holding terms.json,
    /// categories.json and site.json
    #[arg(long, global = true, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Subcommand (if not provided, starts the interactive viewer)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the lexicon once and print the matching terms
    Search {
        /// Free-text query (matches names, description, tags, examples)
        query: String,

        /// Restrict to one category key
        #[arg(long, default_value = khlex_common::ALL_CATEGORIES)]
        category: String,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// List categories with term counts
    Categories {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Export the whole lexicon as a dated JSON document
    Export {
        /// Output file (defaults to khmer-tech-terms-<date>.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_viewer() {
        let cli = Cli::try_parse_from(["khlexctl"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.source, DEFAULT_SOURCE);
    }

    #[test]
    fn test_search_defaults_to_all_categories() {
        let cli = Cli::try_parse_from(["khlexctl", "search", "cache"]).unwrap();
        match cli.command {
            Some(Commands::Search { query, category, json }) => {
                assert_eq!(query, "cache");
                assert_eq!(category, khlex_common::ALL_CATEGORIES);
                assert!(!json);
            }
            _ => panic!("expected search subcommand"),
        }
    }

    #[test]
    fn test_source_is_global() {
        let cli =
            Cli::try_parse_from(["khlexctl", "search", "cache", "--source", "./data"]).unwrap();
        assert_eq!(cli.source, "./data");
    }
}
