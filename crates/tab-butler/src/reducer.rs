use tab_butler_palette::{DispatchMessage, LoadingState};

use crate::{
    actions::Action,
    effect::Effect,
    state::{AppState, DebugConsoleState, HostState},
};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns new state and effects
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::Bootstrap => effects.push(Effect::LoadHostTabs),
        Action::Quit => state.should_quit = true,
        Action::CommandReceived(message) => {
            if let Some(path) = &state.config.command_log {
                effects.push(Effect::AppendCommandLog {
                    path: path.clone(),
                    message: message.clone(),
                });
            }
        }
        _ => {}
    }

    state.host = host_reducer(state.host, action);
    state.debug_console = debug_console_reducer(state.debug_console, action);

    (state, effects)
}

/// Host tab strip reducer
fn host_reducer(mut state: HostState, action: &Action) -> HostState {
    match action {
        Action::HostTabsLoaded(Ok(tabs)) => {
            log::debug!("Host loaded {} tabs", tabs.len());
            state.tabs = tabs.clone();
            state.loading = LoadingState::Loaded;
            let still_open = state
                .active_tab
                .is_some_and(|id| state.tabs.iter().any(|t| t.id() == id));
            if !still_open {
                state.active_tab = state.tabs.first().map(|t| t.id());
            }
        }
        Action::HostTabsLoaded(Err(err)) => {
            log::warn!("Host could not load tabs: {}", err);
            state.loading = LoadingState::Error(err.clone());
        }
        Action::CommandReceived(message) => {
            state.last_command =
                Some(serde_json::to_string(message).unwrap_or_else(|_| message.command().into()));

            match message {
                DispatchMessage::ChangeActiveTab { tab_id } => {
                    if state.tabs.iter().any(|t| t.id() == *tab_id) {
                        state.active_tab = Some(*tab_id);
                    } else {
                        log::warn!("change-active-tab for unknown tab {}", tab_id);
                    }
                }
                DispatchMessage::RunAction { command } => {
                    log::info!("Action {} requested for tab {:?}", command, state.active_tab);
                }
            }
        }
        _ => {}
    }

    state
}

/// Debug console reducer
fn debug_console_reducer(mut state: DebugConsoleState, action: &Action) -> DebugConsoleState {
    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
        }
        Action::ScrollDebugConsoleUp => {
            state.auto_scroll = false;
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        Action::ScrollDebugConsoleDown => {
            // Upper bound is applied by the view, which knows the viewport
            state.auto_scroll = false;
            state.scroll_offset = state.scroll_offset.saturating_add(1);
        }
        Action::ToggleDebugAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearDebugLogs => {
            if let Ok(mut logs) = state.logs.lock() {
                logs.clear();
            }
            state.scroll_offset = 0;
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tab_butler_palette::{TabCandidate, TabId};

    fn tabs() -> Vec<TabCandidate> {
        vec![
            TabCandidate::new(TabId::new(10), "GitHub", "github.com", 0, None),
            TabCandidate::new(TabId::new(11), "Docs", "docs.rs", 1, None),
        ]
    }

    fn loaded_state() -> AppState {
        let (state, _) = reduce(AppState::default(), &Action::HostTabsLoaded(Ok(tabs())));
        state
    }

    #[test]
    fn test_bootstrap_requests_tabs() {
        let (_, effects) = reduce(AppState::default(), &Action::Bootstrap);
        assert!(matches!(effects.as_slice(), [Effect::LoadHostTabs]));
    }

    #[test]
    fn test_loaded_tabs_activate_first() {
        let state = loaded_state();
        assert_eq!(state.host.tabs.len(), 2);
        assert_eq!(state.host.active_tab, Some(TabId::new(10)));
        assert_eq!(state.host.loading, LoadingState::Loaded);
    }

    #[test]
    fn test_load_error_keeps_previous_tabs() {
        let (state, _) = reduce(
            loaded_state(),
            &Action::HostTabsLoaded(Err("tabs.json missing".into())),
        );
        assert_eq!(state.host.tabs.len(), 2);
        assert_eq!(
            state.host.loading,
            LoadingState::Error("tabs.json missing".into())
        );
    }

    #[test]
    fn test_change_active_tab_marks_tab() {
        let message = DispatchMessage::ChangeActiveTab {
            tab_id: TabId::new(11),
        };
        let (state, effects) = reduce(loaded_state(), &Action::CommandReceived(message));

        assert_eq!(state.host.active_tab, Some(TabId::new(11)));
        assert_eq!(
            state.host.last_command.as_deref(),
            Some(r#"{"command":"change-active-tab","tabIdentifier":11}"#)
        );
        // No command log configured
        assert!(effects.is_empty());
    }

    #[test]
    fn test_change_active_tab_ignores_unknown_tab() {
        let message = DispatchMessage::ChangeActiveTab {
            tab_id: TabId::new(99),
        };
        let (state, _) = reduce(loaded_state(), &Action::CommandReceived(message));
        assert_eq!(state.host.active_tab, Some(TabId::new(10)));
    }

    #[test]
    fn test_command_log_effect_when_configured() {
        let mut state = loaded_state();
        state.config.command_log = Some(PathBuf::from("/tmp/commands.jsonl"));

        let message = DispatchMessage::RunAction {
            command: "pin-tab".into(),
        };
        let (state, effects) = reduce(state, &Action::CommandReceived(message.clone()));

        assert_eq!(
            state.host.last_command.as_deref(),
            Some(r#"{"command":"pin-tab"}"#)
        );
        match effects.as_slice() {
            [Effect::AppendCommandLog { path, message: logged }] => {
                assert_eq!(path, &PathBuf::from("/tmp/commands.jsonl"));
                assert_eq!(logged, &message);
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_debug_console_scrolling() {
        let (state, _) = reduce(AppState::default(), &Action::ToggleDebugConsole);
        assert!(state.debug_console.is_open);

        let (state, _) = reduce(state, &Action::ScrollDebugConsoleUp);
        assert_eq!(state.debug_console.scroll_offset, 0);
        assert!(!state.debug_console.auto_scroll);

        let (state, _) = reduce(state, &Action::ScrollDebugConsoleDown);
        assert_eq!(state.debug_console.scroll_offset, 1);

        let (state, _) = reduce(state, &Action::ToggleDebugAutoScroll);
        assert!(state.debug_console.auto_scroll);
    }

    #[test]
    fn test_quit() {
        let (state, effects) = reduce(AppState::default(), &Action::Quit);
        assert!(state.should_quit);
        assert!(effects.is_empty());
    }
}
