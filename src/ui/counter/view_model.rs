//! View-model owning the counter state.

use crate::state::{StateFlow, Subscription};
use crate::ui::counter::error::CounterError;
use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

/// Single source of truth for the counter.
///
/// The state flow stays private: callers can read and observe snapshots,
/// but the only way to change them is through intents.
#[derive(Clone, Default)]
pub struct CounterViewModel {
    state: StateFlow<CounterState>,
}

impl CounterViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing snapshot instead of zero.
    pub fn with_initial(state: CounterState) -> Self {
        Self {
            state: StateFlow::new(state),
        }
    }

    /// Latest snapshot.
    pub fn current(&self) -> CounterState {
        self.state.value()
    }

    /// Calls `observer` with the current snapshot now and with every later one.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&CounterState) + Send + Sync + 'static,
    {
        self.state.subscribe(observer)
    }

    /// Adds one to the count and notifies subscribers once.
    ///
    /// At `u64::MAX` the count stays put (a warning is logged) and subscribers
    /// are still notified. Use [`try_increment`](Self::try_increment) to fail instead.
    pub fn increment(&self) -> CounterState {
        self.dispatch(CounterIntent::Increment)
    }

    pub fn try_increment(&self) -> Result<CounterState, CounterError> {
        let result = self.state.try_update(|state| {
            state
                .checked_increment()
                .ok_or(CounterError::Overflow {
                    count: state.count(),
                })
        });
        match &result {
            Ok(next) => {
                tracing::debug!(count = next.count(), is_even = next.is_even(), "counter incremented")
            }
            Err(err) => tracing::warn!(%err, "increment rejected"),
        }
        result
    }

    /// Runs `intent` through [`CounterReducer`] and publishes the result.
    pub fn dispatch(&self, intent: CounterIntent) -> CounterState {
        let next = self.state.update(|state| {
            if state.count() == u64::MAX {
                tracing::warn!(?intent, "counter saturated at u64::MAX");
            }
            CounterReducer::reduce(*state, intent)
        });
        tracing::debug!(
            ?intent,
            count = next.count(),
            is_even = next.is_even(),
            "counter state updated"
        );
        next
    }
}

impl std::fmt::Debug for CounterViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterViewModel")
            .field("state", &self.current())
            .field("subscribers", &self.state.subscriber_count())
            .finish()
    }
}
