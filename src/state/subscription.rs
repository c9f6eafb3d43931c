use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle to a registered observer.
///
/// Dropping the handle unsubscribes. Call [`detach`](Self::detach) to keep
/// the observer for as long as the flow lives.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    active: Arc<AtomicBool>,
    remove: Option<Box<dyn FnOnce() + Send + Sync + 'static>>,
}

impl Subscription {
    pub(crate) fn new<F>(active: Arc<AtomicBool>, remove: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            active,
            remove: Some(Box::new(remove)),
        }
    }

    /// True until the observer is unsubscribed.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn unsubscribe(mut self) {
        self.cancel();
    }

    /// Gives up the handle without unsubscribing.
    ///
    /// A detached observer that captures a strong clone of its own
    /// `StateFlow` forms a reference cycle and the flow is never freed.
    /// Capture a [`WeakStateFlow`](crate::state::WeakStateFlow) instead.
    pub fn detach(mut self) {
        self.remove = None;
    }

    fn cancel(&mut self) {
        if let Some(remove) = self.remove.take() {
            self.active.store(false, Ordering::Release);
            remove();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
