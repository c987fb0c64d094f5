//! Export of the in-memory lexicon to a downloadable JSON document.
//!
//! A pure serialization of current state plus envelope metadata; nothing is
//! transformed on the way out. Failures are reported to the caller and never
//! touch application state.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, LexiconData};
use crate::error::LexiconError;
use crate::terms::Term;

/// Envelope metadata for an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// ISO-8601 timestamp of the export
    pub export_date: String,

    /// Number of terms in the export
    pub total_terms: usize,

    /// Lexicon version from the site metadata
    pub version: String,

    /// Tool that produced the export
    pub exported_by: String,
}

/// The exported document: metadata plus the full term and category sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEnvelope {
    pub metadata: ExportMetadata,
    pub terms: Vec<Term>,
    pub categories: BTreeMap<String, Category>,
}

impl ExportEnvelope {
    /// Build an envelope around the current in-memory state.
    pub fn new(data: &LexiconData, now: DateTime<Utc>, exported_by: &str) -> Self {
        Self {
            metadata: ExportMetadata {
                export_date: now.to_rfc3339(),
                total_terms: data.terms.len(),
                version: data.site.version().unwrap_or("unknown").to_string(),
                exported_by: exported_by.to_string(),
            },
            terms: data.terms.clone(),
            categories: data.categories.clone(),
        }
    }

    pub fn to_pretty_json(&self) -> Result<String, LexiconError> {
        serde_json::to_string_pretty(self).map_err(|e| LexiconError::Export(e.to_string()))
    }
}

/// Default export file name, dated with the current day.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("khmer-tech-terms-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize and write the envelope, creating parent directories as needed.
pub fn write_export(envelope: &ExportEnvelope, path: &Path) -> Result<(), LexiconError> {
    let json = envelope.to_pretty_json()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| LexiconError::Export(e.to_string()))?;
        }
    }

    fs::write(path, json).map_err(|e| LexiconError::Export(e.to_string()))?;
    Ok(())
}
