//! Page-wide scroll broadcast.
//!
//! [`ScrollSignal`] holds the latest [`ScrollSnapshot`] and notifies listeners in
//! registration order. Each listener lives exactly as long as the [`Subscription`]
//! guard returned by [`ScrollSignal::subscribe`]; dropping the guard deregisters it,
//! including from inside another listener's callback.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::foundation::core::Viewport;

/// Scroll/resize input for one tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSnapshot {
    pub viewport: Viewport,
    /// Total scrollable height of the document.
    pub document_height: f64,
}

impl ScrollSnapshot {
    pub fn new(viewport: Viewport, document_height: f64) -> Self {
        Self {
            viewport,
            document_height,
        }
    }
}

type ListenerRc = Rc<dyn Fn(&ScrollSnapshot)>;
type ListenerWeak = Weak<dyn Fn(&ScrollSnapshot)>;

#[derive(Default)]
struct SignalInner {
    latest: Option<ScrollSnapshot>,
    listeners: Vec<ListenerWeak>,
}

/// Cloning yields another handle to the same signal.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl std::fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollSignal")
            .field("latest", &inner.latest)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<ScrollSnapshot> {
        self.inner.borrow().latest
    }

    /// Register `listener`. It is called on every later [`publish`](Self::publish)
    /// until the returned guard is dropped.
    #[must_use = "dropping the Subscription deregisters the listener"]
    pub fn subscribe(&self, listener: impl Fn(&ScrollSnapshot) + 'static) -> Subscription {
        let strong: ListenerRc = Rc::new(listener);
        self.inner
            .borrow_mut()
            .listeners
            .push(Rc::downgrade(&strong));
        Subscription { _listener: strong }
    }

    /// Store `snapshot` as the latest value and notify live listeners.
    ///
    /// Listeners may subscribe, drop guards or publish again while being notified; a
    /// listener dropped mid-dispatch is not called afterwards.
    pub fn publish(&self, snapshot: ScrollSnapshot) {
        let listeners: Vec<ListenerWeak> = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = Some(snapshot);
            inner.listeners.retain(|w| w.strong_count() > 0);
            inner.listeners.clone()
        };
        for weak in listeners {
            if let Some(listener) = weak.upgrade() {
                listener(&snapshot);
            }
        }
    }

    /// Listeners whose guards are still alive.
    pub fn listener_count(&self) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}

/// Guard keeping one scroll listener registered.
pub struct Subscription {
    _listener: ListenerRc,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/signal.rs"]
mod tests;
