//! Typed synchronous publish-subscribe
//!
//! Key principles:
//! - One emitter per event source, typed by its event enum
//! - Synchronous delivery: listeners run before `emit` returns
//! - One-shot subscriptions are removed after their first delivery
//! - Single-threaded by design; no locking

use std::fmt;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Key identifying a registered listener, returned by
    /// [`EventEmitter::on`] and [`EventEmitter::once`]
    pub struct Subscription;
}

type Callback<E> = Box<dyn FnMut(&E)>;

struct Listener<E> {
    callback: Callback<E>,
    once: bool,
}

/// Typed event emitter
///
/// Listeners are plain `FnMut(&E)` closures, delivered in registration
/// order. Because delivery borrows the emitter mutably, a listener cannot
/// re-enter the emitter it is registered on; subscription changes happen
/// between emissions.
pub struct EventEmitter<E> {
    listeners: SlotMap<Subscription, Listener<E>>,
    order: Vec<Subscription>,
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> EventEmitter<E> {
    /// Create a new emitter with no listeners
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a persistent listener
    pub fn on<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&E) + 'static,
    {
        self.register(Box::new(callback), false)
    }

    /// Register a one-shot listener, removed after its first delivery
    pub fn once<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&E) + 'static,
    {
        self.register(Box::new(callback), true)
    }

    /// Remove a listener
    ///
    /// Returns true if the subscription was still registered.
    pub fn off(&mut self, subscription: Subscription) -> bool {
        if self.listeners.remove(subscription).is_some() {
            self.order.retain(|key| *key != subscription);
            true
        } else {
            false
        }
    }

    /// Deliver an event to every live listener, in registration order
    pub fn emit(&mut self, event: &E) {
        let mut finished = Vec::new();
        for &key in &self.order {
            if let Some(listener) = self.listeners.get_mut(key) {
                (listener.callback)(event);
                if listener.once {
                    finished.push(key);
                }
            }
        }

        for key in finished {
            self.listeners.remove(key);
            self.order.retain(|k| *k != key);
        }
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.order.clear();
    }

    fn register(&mut self, callback: Callback<E>, once: bool) -> Subscription {
        let key = self.listeners.insert(Listener { callback, once });
        self.order.push(key);
        key
    }
}
