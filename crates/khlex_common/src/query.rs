//! Lexicon query engine.
//!
//! The one part of the viewer with real logic: given the loaded terms and the
//! current query state, compute the visible subset. Design principles:
//!
//! - The engine is pure: no UI state mutation inside `query()`
//! - Both filters narrow independently; results keep the original load order
//! - Missing optional fields are non-matching for that field, never an error

use serde::{Deserialize, Serialize};

use crate::terms::Term;

/// Sentinel category key matching every term.
pub const ALL_CATEGORIES: &str = "all";

/// The user's current search text and selected category filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text query; leading/trailing whitespace is ignored
    pub search_text: String,

    /// Selected category key, or [`ALL_CATEGORIES`]
    pub category: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl QueryState {
    pub fn new(search_text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            category: category.into(),
        }
    }
}

/// Compute the visible subset of `terms` for `state`.
///
/// Order-preserving, no ranking, no pagination: the full match set comes back
/// and the count is its length.
pub fn query<'a>(terms: &'a [Term], state: &QueryState) -> Vec<&'a Term> {
    terms.iter().filter(|t| matches(t, state)).collect()
}

/// Combined predicate: category AND free-text.
pub fn matches(term: &Term, state: &QueryState) -> bool {
    let needle = state.search_text.trim();
    category_matches(term, &state.category) && (needle.is_empty() || text_matches(term, needle))
}

/// Category selector: exact key equality, with [`ALL_CATEGORIES`] matching
/// everything. Unknown keys simply match nothing.
pub fn category_matches(term: &Term, selected: &str) -> bool {
    selected == ALL_CATEGORIES || term.category_key == selected
}

/// Free-text match across the searchable fields, logical OR.
///
/// English-language fields fold case; the Khmer fields never do. Khmer script
/// has no case distinction and lowercasing must not touch those comparisons.
pub fn text_matches(term: &Term, needle: &str) -> bool {
    let folded = needle.to_lowercase();

    if term.english_name.to_lowercase().contains(&folded) {
        return true;
    }
    if term.khmer_name.contains(needle) {
        return true;
    }
    if let Some(description) = &term.description {
        if description.to_lowercase().contains(&folded) {
            return true;
        }
    }
    if let Some(tags) = &term.tags {
        if tags.iter().any(|tag| tag.to_lowercase().contains(&folded)) {
            return true;
        }
    }
    if let Some(examples) = &term.examples {
        if let Some(english) = &examples.english_example {
            if english.to_lowercase().contains(&folded) {
                return true;
            }
        }
        if let Some(khmer) = &examples.khmer_example {
            if khmer.contains(needle) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::TermExamples;

    fn term(english: &str, khmer: &str, category: &str) -> Term {
        Term {
            english_name: english.to_string(),
            khmer_name: khmer.to_string(),
            category_key: category.to_string(),
            description: None,
            tags: None,
            examples: None,
            date_added: None,
            reference: None,
            contributors: None,
            status: None,
        }
    }

    fn sample_terms() -> Vec<Term> {
        let mut cache = term("Cache", "ឃ្លាំងសម្ងាត់", "storage");
        cache.description = Some("Fast intermediate storage".to_string());
        cache.tags = Some(vec!["Memory".to_string(), "performance".to_string()]);

        let mut scheduler = term("Scheduler", "កម្មវិធីកំណត់ពេល", "compute");
        scheduler.examples = Some(TermExamples {
            english_example: Some("The scheduler picks the next task.".to_string()),
            khmer_example: Some("កម្មវិធីកំណត់ពេលជ្រើសរើសការងារបន្ទាប់។".to_string()),
        });

        vec![cache, scheduler, term("Disk", "ថាស", "storage")]
    }

    #[test]
    fn test_results_are_an_ordered_subset() {
        let terms = sample_terms();
        let state = QueryState::new("", "storage");
        let result = query(&terms, &state);

        assert_eq!(result.len(), 2);
        // Original load order, not alphabetical
        assert_eq!(result[0].english_name, "Cache");
        assert_eq!(result[1].english_name, "Disk");
    }

    #[test]
    fn test_query_is_idempotent() {
        let terms = sample_terms();
        let state = QueryState::new("a", ALL_CATEGORIES);
        assert_eq!(query(&terms, &state), query(&terms, &state));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let terms = sample_terms();
        let result = query(&terms, &QueryState::new("", "compute"));
        assert!(result.iter().all(|t| t.category_key == "compute"));

        // Unknown keys match nothing, no fallback
        assert!(query(&terms, &QueryState::new("", "Storage")).is_empty());
        assert!(query(&terms, &QueryState::new("", "network")).is_empty());
    }

    #[test]
    fn test_all_sentinel_disables_category_filter() {
        let terms = sample_terms();
        let result = query(&terms, &QueryState::default());
        assert_eq!(result.len(), terms.len());
    }

    #[test]
    fn test_english_match_is_case_insensitive() {
        let terms = vec![term("api gateway", "ច្រកផ្លូវ API", "web")];
        let result = query(&terms, &QueryState::new("API", ALL_CATEGORIES));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_khmer_match_is_exact() {
        let terms = sample_terms();
        assert_eq!(query(&terms, &QueryState::new("ថាស", ALL_CATEGORIES)).len(), 1);
        // A Khmer needle that appears nowhere matches nothing
        assert!(query(&terms, &QueryState::new("មិនមាន", ALL_CATEGORIES)).is_empty());
    }

    #[test]
    fn test_description_and_tags_match() {
        let terms = sample_terms();
        assert_eq!(
            query(&terms, &QueryState::new("intermediate", ALL_CATEGORIES)).len(),
            1
        );
        // Tag match folds case in both directions
        assert_eq!(query(&terms, &QueryState::new("memory", ALL_CATEGORIES)).len(), 1);
        assert_eq!(query(&terms, &QueryState::new("PERFORMANCE", ALL_CATEGORIES)).len(), 1);
    }

    #[test]
    fn test_example_fields_match() {
        let terms = sample_terms();
        assert_eq!(
            query(&terms, &QueryState::new("next task", ALL_CATEGORIES)).len(),
            1
        );
        assert_eq!(
            query(&terms, &QueryState::new("ជ្រើសរើស", ALL_CATEGORIES)).len(),
            1
        );
    }

    #[test]
    fn test_empty_search_yields_category_filtered_set() {
        let terms = sample_terms();
        let with_blank = query(&terms, &QueryState::new("   ", "storage"));
        let with_empty = query(&terms, &QueryState::new("", "storage"));
        assert_eq!(with_blank, with_empty);
        assert_eq!(with_empty.len(), 2);
    }

    #[test]
    fn test_both_filters_narrow_independently() {
        let terms = sample_terms();
        // "a" appears in Cache and Disk names but only Cache is storage+desc match
        let result = query(&terms, &QueryState::new("cache", "compute"));
        assert!(result.is_empty());

        let result = query(&terms, &QueryState::new("cache", "storage"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_zero_matches_has_count_zero() {
        let terms = sample_terms();
        let result = query(&terms, &QueryState::new("zzz-no-such-term", ALL_CATEGORIES));
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let terms = vec![
            term("Cache", "ឃាស", "storage"),
            term("Scheduler", "សឈេឌ", "compute"),
        ];

        // Selecting category "storage" returns exactly the first term
        let result = query(&terms, &QueryState::new("", "storage"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].english_name, "Cache");

        // Typing "sched" with category reset to "all" returns the second
        let result = query(&terms, &QueryState::new("sched", ALL_CATEGORIES));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].english_name, "Scheduler");

        // Clearing search with category "all" returns both in original order
        let result = query(&terms, &QueryState::default());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].english_name, "Cache");
        assert_eq!(result[1].english_name, "Scheduler");
    }
}
