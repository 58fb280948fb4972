use std::sync::Arc;

use crate::{
    candidate::{Candidate, SearchMode},
    search::{self, CandidateSet},
    selection,
};

/// Identifies one mount of the overlay
///
/// Results of asynchronous work are tagged with the activation that requested
/// them so a later activation never receives data meant for an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ActivationId(u64);

impl ActivationId {
    pub fn new(value: u64) -> Self {
        ActivationId(value)
    }

    pub fn next(&self) -> Self {
        ActivationId(self.0.wrapping_add(1))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Loading state of the tab inventory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Query state owned by the interaction state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub mode: SearchMode,
    pub query_text: String,
    /// Index into the filtered sequence, 0 when it is empty
    pub selected_index: usize,
}

impl QueryState {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            query_text: String::new(),
            selected_index: 0,
        }
    }
}

/// Root palette state following Redux pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    pub query: QueryState,
    pub candidates: CandidateSet,
    pub tabs_loading: LoadingState,
}

impl PaletteState {
    /// State for a freshly mounted overlay
    pub fn new(mode: SearchMode, tabs: Arc<[Candidate]>, actions: Arc<[Candidate]>) -> Self {
        Self {
            query: QueryState::new(mode),
            candidates: CandidateSet::new(tabs, actions),
            tabs_loading: LoadingState::Idle,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.query.mode
    }

    pub fn query_text(&self) -> &str {
        &self.query.query_text
    }

    pub fn selected_index(&self) -> usize {
        self.query.selected_index
    }

    /// Candidates matching the current query, recomputed on every call
    pub fn filtered(&self) -> Vec<&Candidate> {
        search::filter_for_mode(&self.query.query_text, &self.candidates, self.query.mode)
    }

    /// The highlighted candidate, if the index points into the filtered sequence
    pub fn selected(&self) -> Option<&Candidate> {
        self.filtered().get(self.query.selected_index).copied()
    }

    /// Pull `selected_index` back into range after the filtered sequence changed
    pub(crate) fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.query.selected_index = selection::clamp(self.query.selected_index, len);
    }
}
