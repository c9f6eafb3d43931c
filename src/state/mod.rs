//! Observable state container.
//!
//! [`StateFlow`] holds exactly one current snapshot of a value and pushes
//! every new snapshot to its subscribers, in the order they subscribed.
//!
//! # Invariants
//!
//! 1. Every update produces exactly one notification per active subscriber.
//! 2. Subscribers receive the current snapshot immediately on subscribe.
//! 3. An unsubscribed observer is never called again, even if it was
//!    removed in the middle of a notification cycle.
//! 4. Snapshots are replaced, never mutated in place.

mod flow;
mod subscription;

pub use flow::{StateFlow, WeakStateFlow};
pub use subscription::Subscription;
