//! Wire model for the terms document.
//!
//! Field names follow the published JSON documents (camelCase). The English
//! and Khmer names are mandatory: a document carrying a term without both
//! fails deserialization, which fails the whole load. The query engine never
//! has to defend against nameless terms.

use serde::{Deserialize, Serialize};

/// A single glossary entry pairing an English and a Khmer name.
///
/// Terms are immutable once loaded and identified by their position in the
/// source collection; there is no explicit id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// English name
    pub english_name: String,

    /// Khmer name
    pub khmer_name: String,

    /// Key into the category map
    pub category_key: String,

    /// Longer English description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form tags, order preserved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Usage examples in both languages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<TermExamples>,

    /// Date the term was added, as published (not parsed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,

    /// Reference URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Contributor names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<String>>,

    /// Review status, e.g. "verified"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Term {
    /// Whether the term has been reviewed and verified
    pub fn is_verified(&self) -> bool {
        self.status.as_deref() == Some("verified")
    }
}

/// Usage examples attached to a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermExamples {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_example: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub khmer_example: Option<String>,
}

/// Envelope of the terms document: `{ "terms": [ ... ] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsDocument {
    pub terms: Vec<Term>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_term() {
        let json = r#"{
            "englishName": "Cache",
            "khmerName": "ឃ្លាំងសម្ងាត់",
            "categoryKey": "storage",
            "description": "Fast intermediate storage",
            "tags": ["memory", "performance"],
            "examples": {
                "englishExample": "The cache reduced load times.",
                "khmerExample": "ឃ្លាំងសម្ងាត់បានកាត់បន្ថយពេលវេលា។"
            },
            "dateAdded": "2024-03-01",
            "reference": "https://example.org/cache",
            "contributors": ["dara"],
            "status": "verified"
        }"#;

        let term: Term = serde_json::from_str(json).unwrap();
        assert_eq!(term.english_name, "Cache");
        assert_eq!(term.category_key, "storage");
        assert_eq!(term.tags.as_ref().unwrap().len(), 2);
        assert!(term.is_verified());
    }

    #[test]
    fn test_parse_minimal_term() {
        let json = r#"{"englishName": "API", "khmerName": "អេភីអាយ", "categoryKey": "web"}"#;
        let term: Term = serde_json::from_str(json).unwrap();
        assert!(term.description.is_none());
        assert!(term.examples.is_none());
        assert!(!term.is_verified());
    }

    #[test]
    fn test_missing_mandatory_name_is_rejected() {
        // Nameless terms must fail at parse time, not during matching
        let json = r#"{"englishName": "API", "categoryKey": "web"}"#;
        assert!(serde_json::from_str::<Term>(json).is_err());

        let json = r#"{"khmerName": "អេភីអាយ", "categoryKey": "web"}"#;
        assert!(serde_json::from_str::<Term>(json).is_err());
    }

    #[test]
    fn test_terms_document_preserves_order() {
        let json = r#"{"terms": [
            {"englishName": "B", "khmerName": "ខ", "categoryKey": "x"},
            {"englishName": "A", "khmerName": "ក", "categoryKey": "x"}
        ]}"#;
        let doc: TermsDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.terms[0].english_name, "B");
        assert_eq!(doc.terms[1].english_name, "A");
    }
}
