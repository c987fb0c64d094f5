//! Loader for the three lexicon documents.
//!
//! The viewer accepts no partial data: terms, categories, and site metadata
//! are fetched together and any failure - transport, status, or parse -
//! fails the whole load. There is no retry; a failed load is surfaced once
//! and the user restarts.

use std::path::PathBuf;
use std::time::Duration;

use khlex_common::{CategoriesDocument, LexiconData, LexiconError, SiteMeta, TermsDocument};
use tracing::{debug, info};

/// Per-resource fetch timeout, cancelling the underlying request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub const TERMS_RESOURCE: &str = "terms.json";
pub const CATEGORIES_RESOURCE: &str = "categories.json";
pub const SITE_RESOURCE: &str = "site.json";

/// Where the three documents live.
#[derive(Debug, Clone)]
pub enum LexiconSource {
    /// Base URL serving the documents
    Remote(String),
    /// Local directory containing the documents
    Local(PathBuf),
}

impl LexiconSource {
    /// A URL is remote; anything else is treated as a directory.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            LexiconSource::Remote(raw.trim_end_matches('/').to_string())
        } else {
            LexiconSource::Local(PathBuf::from(raw))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            LexiconSource::Remote(base) => base.clone(),
            LexiconSource::Local(dir) => dir.display().to_string(),
        }
    }
}

/// Fetches the three documents and assembles [`LexiconData`].
pub struct Loader {
    source: LexiconSource,
    client: reqwest::Client,
}

impl Loader {
    pub fn new(source: LexiconSource) -> Result<Self, LexiconError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| LexiconError::Network(e.to_string()))?;

        Ok(Self { source, client })
    }

    /// Load all three documents concurrently, all-or-nothing.
    pub async fn load(&self) -> Result<LexiconData, LexiconError> {
        let (terms, categories, site) = tokio::try_join!(
            self.fetch::<TermsDocument>(TERMS_RESOURCE),
            self.fetch::<CategoriesDocument>(CATEGORIES_RESOURCE),
            self.fetch::<SiteMeta>(SITE_RESOURCE),
        )?;

        info!(
            "loaded {} terms, {} categories from {}",
            terms.terms.len(),
            categories.categories.len(),
            self.source.describe()
        );

        Ok(LexiconData {
            terms: terms.terms,
            categories: categories.categories,
            site,
        })
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<T, LexiconError> {
        debug!("fetching {}", resource);

        let body = match &self.source {
            LexiconSource::Remote(base) => {
                let url = format!("{}/{}", base, resource);
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| LexiconError::Network(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LexiconError::Http {
                        status: status.as_u16(),
                        url,
                    });
                }

                response
                    .text()
                    .await
                    .map_err(|e| LexiconError::Network(e.to_string()))?
            }
            // Filesystem reads fail fast on their own; the timeout exists to
            // cancel hung sockets
            LexiconSource::Local(dir) => tokio::fs::read_to_string(dir.join(resource)).await?,
        };

        serde_json::from_str(&body).map_err(|e| LexiconError::Json {
            resource: resource.to_string(),
            source: e,
        })
    }
}
