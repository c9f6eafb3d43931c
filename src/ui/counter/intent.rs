//! Intents for the counter screen.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// User pressed the increment button.
    Increment,
}

impl Intent for CounterIntent {}
