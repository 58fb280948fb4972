use crate::{actions::PaletteAction, effect::Effect, reducer::reduce, state::PaletteState};

/// Redux-style Store that holds palette state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - Pure reducers handle state transitions
/// - State is replaced on each action
#[derive(Debug, Default)]
pub struct Store {
    state: PaletteState,
}

impl Store {
    /// Create a new store with initial state
    pub fn new(initial_state: PaletteState) -> Self {
        Self {
            state: initial_state,
        }
    }

    /// Get immutable reference to current state
    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    /// Dispatch an action to update state
    ///
    /// Returns the effects requested by the reducer; the caller executes
    /// them.
    pub fn dispatch(&mut self, action: PaletteAction) -> Vec<Effect> {
        self.dispatch_ref(&action)
    }

    /// Dispatch an action by reference (useful when action should not be moved)
    pub fn dispatch_ref(&mut self, action: &PaletteAction) -> Vec<Effect> {
        let (new_state, effects) = reduce(std::mem::take(&mut self.state), action);
        self.state = new_state;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{ActionCandidate, Candidate, SearchMode};
    use std::sync::Arc;

    #[test]
    fn test_store_dispatch_mode_change() {
        let mut store = Store::default();
        assert_eq!(store.state().mode(), SearchMode::TabSearch);

        let effects = store.dispatch(PaletteAction::ModeChanged(SearchMode::TabActions));
        assert!(effects.is_empty());
        assert_eq!(store.state().mode(), SearchMode::TabActions);
    }

    #[test]
    fn test_store_dispatch_commit_returns_effects() {
        let actions: Vec<Candidate> = vec![ActionCandidate::new("Reload Tab", "reload-tab").into()];
        let mut store = Store::new(PaletteState::new(
            SearchMode::TabActions,
            Arc::from(Vec::new()),
            actions.into(),
        ));

        let effects = store.dispatch(PaletteAction::Commit);
        assert_eq!(effects.len(), 2);
    }
}
