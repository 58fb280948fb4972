//! Tab and action command palette
//!
//! This crate holds the interaction core of the Tab Butler palette:
//! - Substring search over open tabs or extension actions
//! - Selection tracking with wraparound
//! - A Redux-style reducer that turns key, pointer and mode events into
//!   state changes and effects
//! - Scoped key listener registration and per-activation tab fetching
//!
//! Rendering, the tab source and the transport to the host are supplied by
//! the embedding application through [`TabInventory`] and
//! [`DispatchAdapter`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tab_butler_palette::*;
//!
//! let hub = InputHub::new();
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut overlay = Overlay::mount(
//!     ActivationId::new(1),
//!     SearchMode::TabActions,
//!     &ActionCatalog::builtin(),
//!     &hub,
//!     tx,
//! );
//!
//! overlay.apply(PaletteAction::TextChanged("pin".into()));
//! hub.deliver(&Key::Enter);
//!
//! while let Ok(event) = rx.try_recv() {
//!     run_effects(overlay.handle(event), &my_adapter);
//! }
//! ```

mod actions;
mod candidate;
mod effect;
mod keyboard;
mod listener;
mod overlay;
mod provider;
mod reducer;
mod search;
mod selection;
mod state;
mod store;

pub use actions::PaletteAction;
pub use candidate::{
    ActionCandidate, Candidate, CandidateId, ParseModeError, SearchMode, SearchText, TabCandidate,
    TabId,
};
pub use effect::{run_effects, DispatchAdapter, DispatchMessage, Effect, CHANGE_ACTIVE_TAB};
pub use keyboard::{interpret_key, text_input, Key};
pub use listener::{InputHub, KeyHandler, ListenerGuard, Phase, Propagation};
pub use overlay::{Overlay, OverlayEvent};
pub use provider::{
    parse_tab_inventory, tabs_from_raw, ActionCatalog, ActionProvider, BuiltinActions,
    InventoryError, RawTab, TabInventory,
};
pub use reducer::reduce;
pub use search::{filter, filter_for_mode, CandidateSet};
pub use selection::{clamp, hover, move_down, move_up};
pub use state::{ActivationId, LoadingState, PaletteState, QueryState};
pub use store::Store;
