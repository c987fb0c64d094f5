//! Category taxonomy and site metadata.
//!
//! Read-only reference data loaded alongside the terms. Categories are keyed
//! by a stable string; the map is ordered so the category bar renders the
//! same way every session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::terms::Term;

/// Icon shown for categories that don't carry one of their own.
pub const FALLBACK_ICON: &str = "📖";

/// A named grouping of terms with a display icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// English display name
    pub name_en: String,

    /// Khmer display name
    pub name_km: String,

    /// Icon glyph shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Envelope of the categories document: `{ "categories": { <key>: ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesDocument {
    pub categories: BTreeMap<String, Category>,
}

/// Site metadata document: arbitrary key-value pairs, display and export only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteMeta(pub BTreeMap<String, serde_json::Value>);

impl SiteMeta {
    /// Best-effort version string from the metadata
    pub fn version(&self) -> Option<&str> {
        self.get_str("version")
    }

    /// String-valued metadata entry
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }
}

/// Everything the loader returns: terms, categories, and site metadata.
///
/// Held for the whole session and never mutated in place, only filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconData {
    pub terms: Vec<Term>,
    pub categories: BTreeMap<String, Category>,
    pub site: SiteMeta,
}

impl LexiconData {
    /// English display name for a category key, falling back to the raw key
    /// for unknown categories.
    pub fn category_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.categories
            .get(key)
            .map(|c| c.name_en.as_str())
            .unwrap_or(key)
    }

    /// Icon for a category key
    pub fn category_icon(&self, key: &str) -> &str {
        self.categories
            .get(key)
            .and_then(|c| c.icon.as_deref())
            .unwrap_or(FALLBACK_ICON)
    }

    /// Number of terms carrying the given category key
    pub fn term_count(&self, key: &str) -> usize {
        self.terms.iter().filter(|t| t.category_key == key).count()
    }
}
