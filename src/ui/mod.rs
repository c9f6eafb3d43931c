pub mod app;
pub mod counter;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod primary_button;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod spacing;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
