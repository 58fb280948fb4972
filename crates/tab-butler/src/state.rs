use tab_butler_palette::{LoadingState, TabCandidate, TabId};

use crate::{config::Config, log_capture::LogBuffer, theme::Theme};

/// Root application state following Redux pattern
///
/// The mounted palette is not part of this state: it owns a key listener
/// and a fetch task, so it lives on `App` and is dropped on dismiss.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub host: HostState,
    pub debug_console: DebugConsoleState,
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
}

/// The tab strip the palette acts upon
#[derive(Debug, Clone, Default)]
pub struct HostState {
    pub tabs: Vec<TabCandidate>,
    pub active_tab: Option<TabId>,
    pub loading: LoadingState,
    /// Wire form of the most recent message received from the palette
    pub last_command: Option<String>,
}

impl HostState {
    pub fn is_active(&self, tab: &TabCandidate) -> bool {
        self.active_tab == Some(tab.id())
    }
}

#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    /// Follow new logs as they arrive
    pub auto_scroll: bool,
    /// Height as percentage of screen
    pub height_percent: u16,
    pub logs: LogBuffer,
}

impl DebugConsoleState {
    pub fn new(logs: LogBuffer) -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            height_percent: 50,
            logs,
        }
    }
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self::new(crate::log_capture::DebugConsoleLogger::create_buffer())
    }
}
