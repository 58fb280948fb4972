use crate::{actions::Action, effect::Effect, reducer::reduce, state::AppState};

/// Redux-style store for the host state
///
/// Actions go through the root reducer, which returns the next state and
/// the effects the caller has to execute.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access for render-time bookkeeping only
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: &Action) -> Vec<Effect> {
        let (new_state, effects) = reduce(self.state.clone(), action);
        self.state = new_state;
        effects
    }
}
