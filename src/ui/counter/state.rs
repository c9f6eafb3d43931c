//! Snapshot of the counter.

use crate::ui::mvi::UiState;

/// Immutable counter snapshot.
///
/// `is_even` is derived from `count` at construction and cannot be set on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterState {
    count: u64,
    is_even: bool,
}

impl CounterState {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            is_even: count % 2 == 0,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_even(&self) -> bool {
        self.is_even
    }

    /// Next snapshot, or `None` once `count` has reached `u64::MAX`.
    pub fn checked_increment(&self) -> Option<Self> {
        self.count.checked_add(1).map(Self::new)
    }

    /// Next snapshot, pinned at `u64::MAX`.
    pub fn saturating_increment(&self) -> Self {
        Self::new(self.count.saturating_add(1))
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl UiState for CounterState {}
