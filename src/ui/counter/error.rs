use thiserror::Error;

/// Errors from fallible counter operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("counter overflow: {count} is the largest representable value")]
    Overflow { count: u64 },
}
