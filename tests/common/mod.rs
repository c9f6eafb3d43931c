//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use state_hoisting::state::Subscription;
use state_hoisting::ui::counter::{CounterState, CounterViewModel};
use std::sync::Arc;

pub type Recorded = Arc<Mutex<Vec<CounterState>>>;

/// Subscribes a recorder to `vm`. The first entry is the snapshot delivered on subscribe.
pub fn record(vm: &CounterViewModel) -> (Recorded, Subscription) {
    let seen: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = vm.subscribe(move |state| sink.lock().push(*state));
    (seen, subscription)
}

/// Flattens a buffer into newline-separated rows of symbols.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
