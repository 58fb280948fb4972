use ratatui::crossterm::event::Event;
use tab_butler_palette::{DispatchMessage, PaletteAction, SearchMode, TabCandidate};

/// Everything that can happen in the host application
///
/// Palette lifecycle and palette input are routed to the mounted overlay;
/// the rest goes through the host reducer.
#[derive(Debug)]
pub enum Action {
    Bootstrap,
    /// Raw terminal input, routed on the main loop against the live state
    Terminal(Event),

    // Palette lifecycle
    /// Open the palette in a mode, or dismiss it when already open in that mode
    ActivatePalette(SearchMode),
    /// Open the palette in the configured default mode
    ActivateDefaultPalette,
    TogglePaletteMode,
    DismissPalette,
    /// Input forwarded to the mounted palette
    Palette(PaletteAction),
    PointerMoved { column: u16, row: u16 },
    PointerClicked { column: u16, row: u16 },

    // Host page
    HostTabsLoaded(Result<Vec<TabCandidate>, String>),
    CommandReceived(DispatchMessage),

    // Debug console (Quake-style drop-down)
    ToggleDebugConsole,
    ScrollDebugConsoleUp,
    ScrollDebugConsoleDown,
    ToggleDebugAutoScroll,
    ClearDebugLogs,

    Quit,
    None,
}
