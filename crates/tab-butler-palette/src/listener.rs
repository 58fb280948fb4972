//! Shared keyboard input stream with scoped listener registration
//!
//! The hub stands in for the document-level key event target. Listeners
//! registered in the capture phase see every key before bubble-phase
//! listeners and may stop it from propagating further. Registration hands
//! back a [`ListenerGuard`]; dropping the guard removes the listener, so a
//! listener can never outlive the overlay that owns it.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::keyboard::Key;

/// Phase a listener is registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Bubble,
}

/// Whether a key continues to later listeners and the default handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    /// Key handled; default behavior suppressed
    Stop,
}

/// Handlers run with the hub locked and must not call back into it
pub type KeyHandler = Box<dyn FnMut(&Key) -> Propagation + Send>;

struct Listener {
    id: u64,
    phase: Phase,
    handler: KeyHandler,
}

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

fn lock(inner: &Mutex<HubInner>) -> MutexGuard<'_, HubInner> {
    // A panicking handler must not take the whole input stream down with it
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// The global key event stream
#[derive(Clone, Default)]
pub struct InputHub {
    inner: Arc<Mutex<HubInner>>,
}

impl InputHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays active until the returned guard is dropped
    #[must_use = "dropping the guard immediately removes the listener"]
    pub fn listen(&self, phase: Phase, handler: KeyHandler) -> ListenerGuard {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push(Listener { id, phase, handler });
        log::debug!("Registered {:?} key listener #{}", phase, id);

        ListenerGuard {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `key` to capture listeners, then bubble listeners, in
    /// registration order, stopping at the first one that returns
    /// [`Propagation::Stop`]
    pub fn deliver(&self, key: &Key) -> Propagation {
        let mut inner = lock(&self.inner);
        for phase in [Phase::Capture, Phase::Bubble] {
            for listener in inner.listeners.iter_mut().filter(|l| l.phase == phase) {
                if (listener.handler)(key) == Propagation::Stop {
                    return Propagation::Stop;
                }
            }
        }
        Propagation::Continue
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

impl fmt::Debug for InputHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputHub")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

/// Keeps one listener registered for as long as it lives
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    hub: Weak<Mutex<HubInner>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            lock(&inner).listeners.retain(|l| l.id != self.id);
            log::debug!("Removed key listener #{}", self.id);
        }
    }
}
