//! Khlex Control - CLI and terminal viewer for the Khmer tech lexicon.
//!
//! With no subcommand, `khlexctl` loads the three lexicon documents and opens
//! the full-screen viewer. Subcommands run the same loader and query engine
//! once and print to stdout.

pub mod cli;
pub mod commands;
pub mod loader;
pub mod tui;
