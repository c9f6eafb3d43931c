use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use super::subscription::Subscription;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

struct Slot<T> {
    id: u64,
    active: Arc<AtomicBool>,
    observer: Observer<T>,
}

struct Inner<T> {
    value: Mutex<T>,
    observers: Mutex<Vec<Slot<T>>>,
    next_id: AtomicU64,
    /// Serializes update + notify so snapshots reach observers in the
    /// order they were applied. Re-entrant so an observer may update the flow.
    dispatch: ReentrantMutex<()>,
}

/// Shared, observable holder of a single current value.
///
/// Cloning a `StateFlow` yields another handle to the same value.
pub struct StateFlow<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for StateFlow<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Non-owning handle to a [`StateFlow`].
///
/// Observers that need to reach their own flow should capture this rather
/// than a clone: a detached observer holding a strong clone keeps the flow
/// alive forever.
pub struct WeakStateFlow<T> {
    inner: Weak<Inner<T>>,
}

impl<T> Clone for WeakStateFlow<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakStateFlow<T> {
    /// `None` once every `StateFlow` handle has been dropped.
    pub fn upgrade(&self) -> Option<StateFlow<T>> {
        self.inner.upgrade().map(|inner| StateFlow { inner })
    }
}

impl<T: Default + Clone + Send + 'static> Default for StateFlow<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + 'static> StateFlow<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(initial),
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                dispatch: ReentrantMutex::new(()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakStateFlow<T> {
        WeakStateFlow {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Returns a copy of the current snapshot.
    pub fn value(&self) -> T {
        self.inner.value.lock().clone()
    }

    /// Registers `observer` and immediately calls it with the current value.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let _dispatch = self.inner.dispatch.lock();

        let observer: Observer<T> = Arc::new(observer);
        let active = Arc::new(AtomicBool::new(true));
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.observers.lock().push(Slot {
            id,
            active: Arc::clone(&active),
            observer: Arc::clone(&observer),
        });

        let current = self.value();
        observer(&current);

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(active, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let removed = {
                let mut observers = inner.observers.lock();
                observers
                    .iter()
                    .position(|slot| slot.id == id)
                    .map(|index| observers.remove(index))
            };
            // The observer may own subscriptions to this flow; their drop
            // relocks `observers`.
            drop(removed);
        })
    }

    /// Replaces the current value and notifies every active observer.
    pub fn set(&self, value: T) {
        self.update(|_| value);
    }

    /// Computes the next snapshot from the current one, stores it, then
    /// notifies observers. Returns the stored snapshot.
    ///
    /// `f` runs while the value is locked and must not call back into this flow.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let _dispatch = self.inner.dispatch.lock();
        let next = {
            let mut value = self.inner.value.lock();
            let next = f(&value);
            *value = next.clone();
            next
        };
        self.notify(&next);
        next
    }

    /// Like [`update`](Self::update), but leaves the value untouched and
    /// skips notification when `f` fails.
    pub fn try_update<F, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&T) -> Result<T, E>,
    {
        let _dispatch = self.inner.dispatch.lock();
        let next = {
            let mut value = self.inner.value.lock();
            let next = f(&value)?;
            *value = next.clone();
            next
        };
        self.notify(&next);
        Ok(next)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.lock().len()
    }

    fn notify(&self, value: &T) {
        // Snapshot the list so observers can (un)subscribe while being called.
        let observers: Vec<(Arc<AtomicBool>, Observer<T>)> = self
            .inner
            .observers
            .lock()
            .iter()
            .map(|slot| (Arc::clone(&slot.active), Arc::clone(&slot.observer)))
            .collect();

        for (active, observer) in observers {
            if active.load(Ordering::Acquire) {
                observer(value);
            }
        }
    }
}
