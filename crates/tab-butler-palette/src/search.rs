//! Substring search over palette candidates

use std::sync::Arc;

use crate::candidate::{Candidate, SearchMode};

/// Candidate collections available to one overlay activation
///
/// Both collections are shared read-only; cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub tabs: Arc<[Candidate]>,
    pub actions: Arc<[Candidate]>,
}

impl CandidateSet {
    pub fn new(tabs: Arc<[Candidate]>, actions: Arc<[Candidate]>) -> Self {
        Self { tabs, actions }
    }

    /// The collection searched in `mode`
    pub fn for_mode(&self, mode: SearchMode) -> &[Candidate] {
        match mode {
            SearchMode::TabSearch => &self.tabs,
            SearchMode::TabActions => &self.actions,
        }
    }
}

/// Filter candidates by a search query
///
/// An empty query returns every candidate in its original order. Otherwise a
/// candidate is kept when one of its searchable fields contains the query,
/// compared case-insensitively. Relative order is always preserved and no
/// scoring takes place.
///
/// # Arguments
///
/// * `query` - The text typed into the palette
/// * `candidates` - The collection for the active mode
/// * `mode` - The active search mode
///
/// # Returns
///
/// References into `candidates`, possibly empty.
pub fn filter<'a>(query: &str, candidates: &'a [Candidate], mode: SearchMode) -> Vec<&'a Candidate> {
    if query.is_empty() {
        return candidates.iter().collect();
    }

    let needle = query.to_lowercase();
    let matches: Vec<&Candidate> = candidates
        .iter()
        .filter(|candidate| candidate.searchable_text().contains(&needle))
        .collect();

    log::trace!(
        "{} query '{}' matched {}/{} candidates",
        mode,
        query,
        matches.len(),
        candidates.len()
    );

    matches
}

/// Filter whichever collection of `set` belongs to `mode`
pub fn filter_for_mode<'a>(query: &str, set: &'a CandidateSet, mode: SearchMode) -> Vec<&'a Candidate> {
    filter(query, set.for_mode(mode), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{ActionCandidate, TabCandidate, TabId};

    fn create_test_tabs() -> Vec<Candidate> {
        vec![
            TabCandidate::new(TabId::new(1), "GitHub", "github.com", 0, None).into(),
            TabCandidate::new(TabId::new(2), "Docs", "docs.rs", 1, None).into(),
            TabCandidate::new(TabId::new(3), "Rust Blog", "blog.rust-lang.org", 2, None).into(),
        ]
    }

    fn ids(results: &[&Candidate]) -> Vec<i64> {
        results
            .iter()
            .filter_map(|c| c.as_tab())
            .map(|t| t.id().value())
            .collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let tabs = create_test_tabs();
        let results = filter("", &tabs, SearchMode::TabSearch);
        assert_eq!(ids(&results), vec![1, 2, 3]);
    }

    #[test]
    fn test_matches_title() {
        let tabs = create_test_tabs();
        let results = filter("doc", &tabs, SearchMode::TabSearch);
        assert_eq!(ids(&results), vec![2]);
    }

    #[test]
    fn test_matches_url() {
        let tabs = create_test_tabs();
        let results = filter("rust-lang", &tabs, SearchMode::TabSearch);
        assert_eq!(ids(&results), vec![3]);
    }

    #[test]
    fn test_case_insensitive() {
        let tabs = create_test_tabs();
        let results = filter("GITHUB", &tabs, SearchMode::TabSearch);
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_order_preserved_for_multiple_matches() {
        let tabs = create_test_tabs();
        let results = filter("s", &tabs, SearchMode::TabSearch);
        assert_eq!(ids(&results), vec![2, 3]);
    }

    #[test]
    fn test_no_match() {
        let tabs = create_test_tabs();
        assert!(filter("zzz", &tabs, SearchMode::TabSearch).is_empty());
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let tabs = create_test_tabs();
        // Letters of "GitHub" in order but not contiguous
        assert!(filter("ghb", &tabs, SearchMode::TabSearch).is_empty());
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        let tabs = create_test_tabs();
        assert_eq!(ids(&filter("rust blog", &tabs, SearchMode::TabSearch)), vec![3]);
        assert!(filter(" docs", &tabs, SearchMode::TabSearch).is_empty());
    }

    #[test]
    fn test_filter_for_mode_selects_collection() {
        let actions: Vec<Candidate> = vec![
            ActionCandidate::new("Close Tab", "close-tab").into(),
            ActionCandidate::new("Pin Tab", "pin-tab").into(),
        ];
        let set = CandidateSet::new(create_test_tabs().into(), actions.into());

        let results = filter_for_mode("pin", &set, SearchMode::TabActions);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_label(), "Pin Tab");

        assert!(filter_for_mode("pin", &set, SearchMode::TabSearch).is_empty());
    }
}
