use std::sync::Arc;

use crate::{
    actions::PaletteAction,
    candidate::Candidate,
    effect::{DispatchMessage, Effect},
    selection,
    state::{LoadingState, PaletteState},
};

/// Root reducer for the palette state machine
/// Pure function: takes state and action, returns new state and effects
pub fn reduce(state: PaletteState, action: &PaletteAction) -> (PaletteState, Vec<Effect>) {
    match action {
        PaletteAction::Commit => commit(state),
        _ => (query_reducer(state, action), Vec::new()),
    }
}

/// Query, mode and selection transitions - never produce effects
fn query_reducer(mut state: PaletteState, action: &PaletteAction) -> PaletteState {
    match action {
        PaletteAction::TextChanged(text) => {
            state.query.query_text = text.clone();
            state.clamp_selection();
        }
        PaletteAction::Input(c) => {
            state.query.query_text.push(*c);
            state.clamp_selection();
        }
        PaletteAction::Backspace => {
            state.query.query_text.pop();
            state.clamp_selection();
        }
        PaletteAction::ModeChanged(mode) => {
            // Full reset so text and selection never leak across modes
            state.query.mode = *mode;
            state.query.query_text.clear();
            state.query.selected_index = 0;
        }
        PaletteAction::ArrowUp => {
            let len = state.filtered().len();
            state.query.selected_index = selection::move_up(state.query.selected_index, len);
        }
        PaletteAction::ArrowDown => {
            let len = state.filtered().len();
            state.query.selected_index = selection::move_down(state.query.selected_index, len);
        }
        PaletteAction::Hover(row) => {
            let len = state.filtered().len();
            state.query.selected_index = selection::hover(state.query.selected_index, *row, len);
        }
        PaletteAction::TabsRequested => {
            state.tabs_loading = LoadingState::Loading;
        }
        PaletteAction::TabsLoaded(Ok(tabs)) => {
            let tabs: Vec<Candidate> = tabs.iter().cloned().map(Candidate::Tab).collect();
            state.candidates.tabs = Arc::from(tabs);
            state.tabs_loading = LoadingState::Loaded;
            state.clamp_selection();
        }
        PaletteAction::TabsLoaded(Err(err)) => {
            // Keep an empty list; the view shows the empty state
            state.candidates.tabs = Arc::from(Vec::new());
            state.tabs_loading = LoadingState::Error(err.to_string());
            state.clamp_selection();
        }
        PaletteAction::Commit => {}
    }

    state
}

/// Commit the highlighted candidate: dispatch it, then dismiss the overlay
fn commit(state: PaletteState) -> (PaletteState, Vec<Effect>) {
    let message = state
        .selected()
        .and_then(|candidate| DispatchMessage::for_candidate(candidate, state.mode()));

    let effects = match message {
        Some(message) => vec![Effect::Dispatch(message), Effect::Dismiss],
        // Nothing highlighted
        None => Vec::new(),
    };

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{ActionCandidate, SearchMode, TabCandidate, TabId};
    use crate::provider::InventoryError;

    fn tabs() -> Vec<Candidate> {
        vec![
            TabCandidate::new(TabId::new(1), "GitHub", "github.com", 0, None).into(),
            TabCandidate::new(TabId::new(2), "Docs", "docs.rs", 1, None).into(),
            TabCandidate::new(TabId::new(3), "Crates", "crates.io", 2, None).into(),
        ]
    }

    fn actions() -> Vec<Candidate> {
        vec![
            ActionCandidate::new("Close Tab", "close-tab").into(),
            ActionCandidate::new("Pin Tab", "pin-tab").into(),
        ]
    }

    fn state(mode: SearchMode) -> PaletteState {
        PaletteState::new(mode, tabs().into(), actions().into())
    }

    fn apply(state: PaletteState, actions: Vec<PaletteAction>) -> PaletteState {
        actions
            .iter()
            .fold(state, |state, action| reduce(state, action).0)
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let s = apply(state(SearchMode::TabSearch), vec![PaletteAction::ArrowUp]);
        assert_eq!(s.selected_index(), 2);

        let s = apply(s, vec![PaletteAction::ArrowDown]);
        assert_eq!(s.selected_index(), 0);
    }

    #[test]
    fn test_text_change_clamps_selection() {
        let s = apply(
            state(SearchMode::TabSearch),
            vec![PaletteAction::ArrowDown, PaletteAction::ArrowDown],
        );
        assert_eq!(s.selected_index(), 2);

        let s = apply(s, vec![PaletteAction::TextChanged("doc".into())]);
        assert_eq!(s.selected_index(), 0);
        assert_eq!(s.selected().map(|c| c.display_label()), Some("Docs"));
    }

    #[test]
    fn test_text_change_keeps_index_that_is_still_valid() {
        let s = apply(
            state(SearchMode::TabSearch),
            vec![PaletteAction::ArrowDown, PaletteAction::TextChanged(".".into())],
        );
        assert_eq!(s.selected_index(), 1);
    }

    #[test]
    fn test_input_and_backspace_edit_query() {
        let s = apply(
            state(SearchMode::TabActions),
            vec![
                PaletteAction::Input('p'),
                PaletteAction::Input('x'),
                PaletteAction::Backspace,
                PaletteAction::Input('i'),
            ],
        );
        assert_eq!(s.query_text(), "pi");
        assert_eq!(s.filtered().len(), 1);

        let s = apply(s, vec![PaletteAction::Backspace, PaletteAction::Backspace, PaletteAction::Backspace]);
        assert_eq!(s.query_text(), "");
    }

    #[test]
    fn test_mode_change_resets_query_and_selection() {
        let s = apply(
            state(SearchMode::TabSearch),
            vec![
                PaletteAction::TextChanged("c".into()),
                PaletteAction::ArrowDown,
                PaletteAction::ModeChanged(SearchMode::TabActions),
            ],
        );
        assert_eq!(s.mode(), SearchMode::TabActions);
        assert_eq!(s.query_text(), "");
        assert_eq!(s.selected_index(), 0);
        assert_eq!(s.filtered().len(), 2);
    }

    #[test]
    fn test_mode_change_to_same_mode_still_resets() {
        let s = apply(
            state(SearchMode::TabSearch),
            vec![
                PaletteAction::TextChanged("git".into()),
                PaletteAction::ModeChanged(SearchMode::TabSearch),
            ],
        );
        assert_eq!(s.query_text(), "");
        assert_eq!(s.selected_index(), 0);
    }

    #[test]
    fn test_hover_sets_index() {
        let s = apply(state(SearchMode::TabSearch), vec![PaletteAction::Hover(2)]);
        assert_eq!(s.selected_index(), 2);

        let s = apply(s, vec![PaletteAction::Hover(10)]);
        assert_eq!(s.selected_index(), 2);
    }

    #[test]
    fn test_commit_tab_dispatches_then_dismisses() {
        let s = apply(state(SearchMode::TabSearch), vec![PaletteAction::ArrowDown]);
        let (_, effects) = reduce(s, &PaletteAction::Commit);
        assert_eq!(
            effects,
            vec![
                Effect::Dispatch(DispatchMessage::ChangeActiveTab {
                    tab_id: TabId::new(2)
                }),
                Effect::Dismiss
            ]
        );
    }

    #[test]
    fn test_commit_action_dispatches_command() {
        let s = apply(state(SearchMode::TabActions), vec![PaletteAction::ArrowUp]);
        let (_, effects) = reduce(s, &PaletteAction::Commit);
        assert_eq!(
            effects[0],
            Effect::Dispatch(DispatchMessage::RunAction {
                command: "pin-tab".into()
            })
        );
    }

    #[test]
    fn test_commit_without_match_is_noop() {
        let s = apply(
            state(SearchMode::TabSearch),
            vec![PaletteAction::TextChanged("zzz".into())],
        );
        let before = s.clone();
        let (after, effects) = reduce(s, &PaletteAction::Commit);
        assert!(effects.is_empty());
        assert_eq!(after, before);
    }

    #[test]
    fn test_tabs_loaded_reseeds_collection() {
        let empty = PaletteState::new(SearchMode::TabSearch, Arc::from(Vec::new()), actions().into());
        let loaded = vec![TabCandidate::new(TabId::new(5), "News", "news.example", 0, None)];

        let (s, _) = reduce(empty, &PaletteAction::TabsLoaded(Ok(loaded)));
        assert_eq!(s.tabs_loading, LoadingState::Loaded);
        assert_eq!(s.filtered().len(), 1);
    }

    #[test]
    fn test_tabs_load_failure_leaves_empty_list() {
        let err = InventoryError::Read(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let (s, _) = reduce(state(SearchMode::TabSearch), &PaletteAction::TabsLoaded(Err(err)));
        assert!(matches!(s.tabs_loading, LoadingState::Error(_)));
        assert!(s.filtered().is_empty());

        let (_, effects) = reduce(s, &PaletteAction::Commit);
        assert!(effects.is_empty());
    }
}
