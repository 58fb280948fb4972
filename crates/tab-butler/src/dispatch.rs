use std::cell::Cell;

use tab_butler_palette::{DispatchAdapter, DispatchMessage};
use tokio::sync::mpsc;

use crate::actions::Action;

/// Delivers palette messages back into the host's action loop
///
/// Messages are queued on the action channel. A dismissal is only recorded
/// here and picked up with [`ChannelDispatcher::take_dismissal`] right after
/// the effects ran, so the overlay is gone before the next input arrives.
#[derive(Debug)]
pub struct ChannelDispatcher {
    tx: mpsc::UnboundedSender<Action>,
    dismissal: Cell<bool>,
}

impl ChannelDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            tx,
            dismissal: Cell::new(false),
        }
    }

    /// Whether the palette asked to be unmounted since the last call
    pub fn take_dismissal(&self) -> bool {
        self.dismissal.replace(false)
    }
}

impl DispatchAdapter for ChannelDispatcher {
    fn dispatch(&self, message: DispatchMessage) {
        log::info!("Palette sent {}", message.command());
        if self.tx.send(Action::CommandReceived(message)).is_err() {
            log::warn!("Host loop closed, dropping palette message");
        }
    }

    fn dismiss(&self) {
        self.dismissal.set(true);
    }
}
