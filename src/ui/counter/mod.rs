//! Counter screen state, intents and view-model.
//!
//! The view-model owns the only [`CounterState`]; widgets receive copies of
//! it and send [`CounterIntent`]s back.

mod error;
mod intent;
mod reducer;
mod state;
mod view_model;

pub use error::CounterError;
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view_model::CounterViewModel;
