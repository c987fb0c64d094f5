//! Error types for khlex.
//!
//! Load-side variants all collapse to one user-visible error state; the
//! distinction exists for logs and tests.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("fetching {url} returned HTTP {status}")]
    Http { status: u16, url: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed {resource}: {source}")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(String),
}

impl LexiconError {
    /// True for the load-side variants that abort initialization.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, LexiconError::Export(_) | LexiconError::Config(_))
    }
}
