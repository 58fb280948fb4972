/// Effect system for the palette reducer
/// The reducer returns (State, Vec<Effect>) where Effects describe side effects to perform
/// Callers execute them against a DispatchAdapter
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, SearchMode, TabId};

/// Command name sent when a tab is committed in tab-search mode
pub const CHANGE_ACTIVE_TAB: &str = "change-active-tab";

/// Message delivered to the host when a candidate is committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireMessage", from = "WireMessage")]
pub enum DispatchMessage {
    /// Switch the browser to the given tab
    ChangeActiveTab { tab_id: TabId },
    /// Run a named extension action
    RunAction { command: String },
}

impl DispatchMessage {
    /// Build the message for `candidate` committed in `mode`
    ///
    /// Returns `None` when the candidate variant does not belong to `mode`.
    pub fn for_candidate(candidate: &Candidate, mode: SearchMode) -> Option<Self> {
        match (mode, candidate) {
            (SearchMode::TabSearch, Candidate::Tab(tab)) => {
                Some(DispatchMessage::ChangeActiveTab { tab_id: tab.id() })
            }
            (SearchMode::TabActions, Candidate::Action(action)) => Some(DispatchMessage::RunAction {
                command: action.command().to_string(),
            }),
            _ => None,
        }
    }

    pub fn command(&self) -> &str {
        match self {
            DispatchMessage::ChangeActiveTab { .. } => CHANGE_ACTIVE_TAB,
            DispatchMessage::RunAction { command } => command,
        }
    }
}

/// Wire shape: `{"command": "...", "tabIdentifier": 2}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMessage {
    command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tab_identifier: Option<TabId>,
}

impl From<DispatchMessage> for WireMessage {
    fn from(message: DispatchMessage) -> Self {
        match message {
            DispatchMessage::ChangeActiveTab { tab_id } => WireMessage {
                command: CHANGE_ACTIVE_TAB.to_string(),
                tab_identifier: Some(tab_id),
            },
            DispatchMessage::RunAction { command } => WireMessage {
                command,
                tab_identifier: None,
            },
        }
    }
}

impl From<WireMessage> for DispatchMessage {
    fn from(wire: WireMessage) -> Self {
        match wire.tab_identifier {
            Some(tab_id) if wire.command == CHANGE_ACTIVE_TAB => {
                DispatchMessage::ChangeActiveTab { tab_id }
            }
            _ => DispatchMessage::RunAction {
                command: wire.command,
            },
        }
    }
}

/// Effects that the reducer can request to be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Forward a committed candidate to the host
    Dispatch(DispatchMessage),

    /// Unmount the overlay
    Dismiss,
}

/// Channel to the host process
///
/// Both calls are fire-and-forget. Implementors own delivery failures; the
/// palette never retries.
pub trait DispatchAdapter: Debug {
    fn dispatch(&self, message: DispatchMessage);

    /// Unmount the overlay entirely
    fn dismiss(&self);
}

/// Execute effects in order against `adapter`
pub fn run_effects(effects: Vec<Effect>, adapter: &dyn DispatchAdapter) {
    for effect in effects {
        match effect {
            Effect::Dispatch(message) => {
                log::debug!("Dispatching {:?}", message);
                adapter.dispatch(message);
            }
            Effect::Dismiss => adapter.dismiss(),
        }
    }
}
