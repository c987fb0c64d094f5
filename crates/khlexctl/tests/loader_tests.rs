//! Loader integration tests.
//!
//! Covers the all-or-nothing contract over a local source:
//! - three documents load together into LexiconData
//! - a missing resource fails the whole load
//! - a malformed document fails the whole load and names the resource
//! - a term without its mandatory names is rejected at load time

use khlexctl::loader::{LexiconSource, Loader};
use khlex_common::LexiconError;
use std::fs;
use std::path::Path;

const TERMS: &str = r#"{"terms": [
    {"englishName": "Cache", "khmerName": "ឃ្លាំងសម្ងាត់", "categoryKey": "storage",
     "tags": ["memory"], "status": "verified"},
    {"englishName": "Scheduler", "khmerName": "កម្មវិធីកំណត់ពេល", "categoryKey": "compute"}
]}"#;

const CATEGORIES: &str = r#"{"categories": {
    "storage": {"nameEn": "Storage", "nameKm": "ការផ្ទុក", "icon": "💾"},
    "compute": {"nameEn": "Compute", "nameKm": "ការគណនា"}
}}"#;

const SITE: &str = r#"{"version": "1.2.0", "project": "Khmer Tech Lexicon"}"#;

fn write_fixture(dir: &Path, terms: &str, categories: &str, site: &str) {
    fs::write(dir.join("terms.json"), terms).unwrap();
    fs::write(dir.join("categories.json"), categories).unwrap();
    fs::write(dir.join("site.json"), site).unwrap();
}

fn loader_for(dir: &Path) -> Loader {
    Loader::new(LexiconSource::Local(dir.to_path_buf())).unwrap()
}

#[tokio::test]
async fn test_local_source_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), TERMS, CATEGORIES, SITE);

    let data = loader_for(dir.path()).load().await.unwrap();

    assert_eq!(data.terms.len(), 2);
    assert_eq!(data.terms[0].english_name, "Cache");
    assert_eq!(data.categories.len(), 2);
    assert_eq!(data.category_label("storage"), "Storage");
    assert_eq!(data.site.version(), Some("1.2.0"));
}

#[tokio::test]
async fn test_missing_resource_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), TERMS, CATEGORIES, SITE);
    fs::remove_file(dir.path().join("site.json")).unwrap();

    let err = loader_for(dir.path()).load().await.unwrap_err();
    assert!(matches!(err, LexiconError::Io(_)));
}

#[tokio::test]
async fn test_malformed_document_fails_and_names_the_resource() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "{ not json", CATEGORIES, SITE);

    let err = loader_for(dir.path()).load().await.unwrap_err();
    match err {
        LexiconError::Json { resource, .. } => assert_eq!(resource, "terms.json"),
        other => panic!("expected Json error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_term_missing_mandatory_name_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let nameless = r#"{"terms": [{"englishName": "Cache", "categoryKey": "storage"}]}"#;
    write_fixture(dir.path(), nameless, CATEGORIES, SITE);

    let err = loader_for(dir.path()).load().await.unwrap_err();
    assert!(matches!(err, LexiconError::Json { .. }));
}

#[tokio::test]
async fn test_empty_documents_are_valid() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"terms": []}"#, r#"{"categories": {}}"#, "{}");

    let data = loader_for(dir.path()).load().await.unwrap();
    assert!(data.terms.is_empty());
    assert!(data.categories.is_empty());
    assert_eq!(data.site.version(), None);
}
