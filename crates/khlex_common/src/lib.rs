//! Khlex Common - Shared types and the query engine for the Khmer tech lexicon
//!
//! Everything the viewer shows flows through these types: the wire model of
//! the three lexicon documents, the pure query engine, the export envelope,
//! the theme preference, and the error taxonomy.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod query;
pub mod render;
pub mod terms;
pub mod theme;

pub use catalog::{CategoriesDocument, Category, LexiconData, SiteMeta};
pub use config::ViewerConfig;
pub use error::LexiconError;
pub use export::{export_file_name, write_export, ExportEnvelope};
pub use query::{query, QueryState, ALL_CATEGORIES};
pub use render::{results_count_label, sanitize};
pub use terms::{Term, TermExamples, TermsDocument};
pub use theme::Theme;
