//! Base trait for UI state.

/// Marker trait for UI state snapshots.
///
/// A snapshot is replaced on every transition, never edited in place, and
/// carries everything a widget needs to draw itself.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
