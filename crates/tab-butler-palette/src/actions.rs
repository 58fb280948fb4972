use crate::{
    candidate::{SearchMode, TabCandidate},
    provider::InventoryError,
};

/// Action enum - every event the palette state machine reacts to
/// Actions are dispatched to the reducer to update state
#[derive(Debug)]
pub enum PaletteAction {
    // Query input
    TextChanged(String),
    Input(char),
    Backspace,

    // Mode
    ModeChanged(SearchMode),

    // Selection
    ArrowUp,
    ArrowDown,
    Hover(usize), // absolute row in the filtered list

    // Enter key or a click on the highlighted row
    Commit,

    // Tab inventory fetch started / resolved
    TabsRequested,
    TabsLoaded(Result<Vec<TabCandidate>, InventoryError>),
}
