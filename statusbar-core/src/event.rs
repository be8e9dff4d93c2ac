// statusbar-core/src/event.rs
use crossbeam::channel::{Receiver, Sender, unbounded};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Fan-out channel for one kind of change notification (theme switches,
/// workspace-state changes).
///
/// Each subscriber gets its own receiver and drains it at its own pace;
/// publishing never blocks.
pub struct Bus<T> {
    inner: Arc<BusInner<T>>,
}

impl<T> Clone for Bus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct BusInner<T> {
    subscribers: RwLock<HashMap<usize, Sender<T>>>,
    next_id: AtomicUsize,
}

/// Subscription handle - dropping this unsubscribes.
pub struct Subscription<T> {
    id: usize,
    bus: Arc<BusInner<T>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        let mut subscribers = self.bus.subscribers.write().unwrap();
        subscribers.remove(&self.id);
    }
}

impl<T> Default for Bus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bus<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                subscribers: RwLock::new(HashMap::new()),
                next_id: AtomicUsize::new(0),
            }),
        }
    }

    /// Returns (Subscription, Receiver) - drop the Subscription to unsubscribe.
    pub fn subscribe(&self) -> (Subscription<T>, Receiver<T>) {
        let (tx, rx) = unbounded();
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);

        {
            let mut subscribers = self.inner.subscribers.write().unwrap();
            subscribers.insert(id, tx);
        }

        let subscription = Subscription {
            id,
            bus: self.inner.clone(),
        };

        (subscription, rx)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.read().unwrap().len()
    }
}

impl<T: Clone> Bus<T> {
    /// Deliver `value` to every current subscriber.
    pub fn publish(&self, value: T) {
        let subscribers = self.inner.subscribers.read().unwrap();

        for tx in subscribers.values() {
            // Ignore send errors (subscriber dropped)
            let _ = tx.send(value.clone());
        }
    }
}
