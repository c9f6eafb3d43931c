//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are what stateless widgets emit instead of mutating state:
/// button presses, key strokes, clicks.
pub trait Intent: Send + 'static {}
