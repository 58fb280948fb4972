//! One mounted palette overlay
//!
//! An [`Overlay`] bundles the palette store with the resources that must not
//! outlive it: its capture-phase key listener and the in-flight tab fetch.
//! Both are released when the overlay is dropped, on every exit path.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::{
    actions::PaletteAction,
    candidate::{Candidate, SearchMode, TabCandidate},
    effect::Effect,
    keyboard::{interpret_key, Key},
    listener::{InputHub, ListenerGuard, Phase, Propagation},
    provider::{ActionCatalog, TabInventory},
    state::{ActivationId, PaletteState},
    store::Store,
};

/// An action addressed to a specific activation
#[derive(Debug)]
pub struct OverlayEvent {
    pub activation: ActivationId,
    pub action: PaletteAction,
}

/// Aborts the wrapped task when dropped
#[derive(Debug)]
struct FetchGuard(JoinHandle<()>);

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// A mounted palette
#[derive(Debug)]
pub struct Overlay {
    activation: ActivationId,
    store: Store,
    events: mpsc::UnboundedSender<OverlayEvent>,
    _listener: ListenerGuard,
    fetch: Option<FetchGuard>,
}

impl Overlay {
    /// Mount a new overlay
    ///
    /// Registers the overlay's single capture-phase key listener on `hub`.
    /// ArrowUp, ArrowDown and Enter are consumed and forwarded through
    /// `events`; all other keys propagate. The tab collection starts empty
    /// until [`Overlay::seed_tabs`] or [`Overlay::fetch_tabs`] supplies it.
    pub fn mount(
        activation: ActivationId,
        mode: SearchMode,
        catalog: &ActionCatalog,
        hub: &InputHub,
        events: mpsc::UnboundedSender<OverlayEvent>,
    ) -> Self {
        let actions: Vec<Candidate> = catalog.all_actions().into_iter().map(Candidate::Action).collect();
        let state = PaletteState::new(mode, Arc::from(Vec::new()), Arc::from(actions));

        let listener_tx = events.clone();
        let listener = hub.listen(
            Phase::Capture,
            Box::new(move |key: &Key| match interpret_key(key) {
                Some(action) => {
                    // Receiver gone means the host loop is shutting down
                    let _ = listener_tx.send(OverlayEvent { activation, action });
                    Propagation::Stop
                }
                None => Propagation::Continue,
            }),
        );

        log::info!("Mounted palette overlay #{} in {} mode", activation.value(), mode);

        Self {
            activation,
            store: Store::new(state),
            events,
            _listener: listener,
            fetch: None,
        }
    }

    pub fn activation(&self) -> ActivationId {
        self.activation
    }

    pub fn state(&self) -> &PaletteState {
        self.store.state()
    }

    /// Apply an action originating from this overlay's own surfaces
    /// (text input, pointer, host mode switch)
    pub fn apply(&mut self, action: PaletteAction) -> Vec<Effect> {
        log::debug!("Overlay #{} <- {:?}", self.activation.value(), action);
        self.store.dispatch(action)
    }

    /// Apply an event from the shared channel, discarding events addressed
    /// to another activation
    pub fn handle(&mut self, event: OverlayEvent) -> Vec<Effect> {
        if event.activation != self.activation {
            log::warn!(
                "Discarding {:?} for stale overlay #{} (current #{})",
                event.action,
                event.activation.value(),
                self.activation.value()
            );
            return Vec::new();
        }

        if matches!(event.action, PaletteAction::TabsLoaded(_)) {
            self.fetch = None;
        }
        self.apply(event.action)
    }

    /// Provide the tab collection synchronously
    pub fn seed_tabs(&mut self, tabs: Vec<TabCandidate>) {
        self.fetch = None;
        self.store.dispatch(PaletteAction::TabsLoaded(Ok(tabs)));
    }

    /// Fetch the tab collection on a background task
    ///
    /// The result arrives as an [`OverlayEvent`] tagged with this
    /// activation. The task is aborted if the overlay is dropped first, and a
    /// result that still slips through is discarded by [`Overlay::handle`]
    /// on whichever overlay is current by then. Must be called from within a
    /// tokio runtime.
    pub fn fetch_tabs<I: TabInventory>(&mut self, inventory: Arc<I>) {
        self.store.dispatch(PaletteAction::TabsRequested);

        let activation = self.activation;
        let tx = self.events.clone();
        let handle = tokio::spawn(async move {
            let result = inventory.fetch_tabs().await;
            match &result {
                Ok(tabs) => log::debug!("Fetched {} tabs for overlay #{}", tabs.len(), activation.value()),
                Err(err) => log::warn!("Tab fetch for overlay #{} failed: {}", activation.value(), err),
            }
            let _ = tx.send(OverlayEvent {
                activation,
                action: PaletteAction::TabsLoaded(result),
            });
        });

        // Replacing an earlier guard aborts the earlier fetch
        self.fetch = Some(FetchGuard(handle));
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.as_ref().is_some_and(|guard| !guard.0.is_finished())
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        log::info!("Unmounted palette overlay #{}", self.activation.value());
    }
}
