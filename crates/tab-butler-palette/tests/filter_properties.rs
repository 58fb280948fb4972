// Filter and selection laws checked over a fixed corpus of tabs and queries
use tab_butler_palette::{
    filter, move_down, move_up, ActionCatalog, Candidate, SearchMode, TabCandidate, TabId,
};

fn corpus() -> Vec<Candidate> {
    [
        ("GitHub", "https://github.com"),
        ("Docs", "https://docs.rs"),
        ("docs.rs – serde", "https://docs.rs/serde"),
        ("", "about:blank"),
        ("Ünïcode Tëst", "https://example.com/ü"),
        ("The Rust Programming Language", "https://doc.rust-lang.org/book"),
        ("Inbox (3)", "https://mail.example.com"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, url))| TabCandidate::new(TabId::new(i as i64 + 1), title, url, i, None).into())
    .collect()
}

fn queries() -> Vec<&'static str> {
    vec![
        "", "d", "DOC", "docs.rs", "rust", "https://", "ü", "ÜNÏ", "zzz", "(3)", " ", "blank", "s/",
    ]
}

fn contains_ci(candidate: &Candidate, query: &str) -> bool {
    let q = query.to_lowercase();
    match candidate {
        Candidate::Tab(tab) => {
            tab.title().to_lowercase().contains(&q) || tab.url().to_lowercase().contains(&q)
        }
        Candidate::Action(action) => action.name().to_lowercase().contains(&q),
    }
}

#[test]
fn empty_query_is_identity() {
    let tabs = corpus();
    let result = filter("", &tabs, SearchMode::TabSearch);
    assert_eq!(result.len(), tabs.len());
    for (kept, original) in result.iter().zip(tabs.iter()) {
        assert!(std::ptr::eq(*kept, original));
    }
}

#[test]
fn results_are_exactly_the_matching_candidates() {
    let tabs = corpus();
    for query in queries() {
        let result = filter(query, &tabs, SearchMode::TabSearch);
        for candidate in &tabs {
            let kept = result.iter().any(|c| std::ptr::eq(*c, candidate));
            assert_eq!(
                kept,
                contains_ci(candidate, query),
                "query {:?} on {:?}",
                query,
                candidate.display_label()
            );
        }
    }
}

#[test]
fn results_preserve_source_order() {
    let tabs = corpus();
    for query in queries() {
        let positions: Vec<usize> = filter(query, &tabs, SearchMode::TabSearch)
            .iter()
            .map(|c| tabs.iter().position(|t| std::ptr::eq(t, *c)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {:?}", query);
    }
}

#[test]
fn filtering_is_idempotent() {
    let tabs = corpus();
    for query in queries() {
        let once: Vec<Candidate> = filter(query, &tabs, SearchMode::TabSearch)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Candidate> = filter(query, &once, SearchMode::TabSearch)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice, "query {:?}", query);
    }
}

#[test]
fn action_catalog_filters_by_name() {
    let actions: Vec<Candidate> = ActionCatalog::builtin()
        .all_actions()
        .into_iter()
        .map(Candidate::Action)
        .collect();

    let labels: Vec<&str> = filter("mute", &actions, SearchMode::TabActions)
        .iter()
        .map(|c| c.display_label())
        .collect();
    assert_eq!(labels, vec!["Mute Tab", "Unmute Tab"]);

    // Command identifiers are not searchable, only names
    assert!(filter("-tab", &actions, SearchMode::TabActions).is_empty());
}

#[test]
fn navigation_never_leaves_range() {
    for n in 0..8 {
        for i in 0..10 {
            let up = move_up(i, n);
            let down = move_down(i, n);
            if n == 0 {
                assert_eq!((up, down), (0, 0));
            } else {
                assert!(up < n && down < n);
            }
        }
    }
}
