use crate::state::Subscription;
use crate::ui::counter::{CounterState, CounterViewModel};
use crate::ui::input::UiAction;
use parking_lot::Mutex;
use ratatui::layout::{Position, Rect};
use std::sync::Arc;

/// Session state of the terminal UI.
///
/// Holds the view-model and the latest snapshot it published. Rendering
/// only ever reads [`snapshot`](Self::snapshot); user actions go to the
/// view-model.
pub struct App {
    should_quit: bool,
    title: String,
    view_model: CounterViewModel,
    snapshot: Arc<Mutex<CounterState>>,
    _subscription: Subscription,
    button_area: Rect,
}

impl App {
    pub fn new(view_model: CounterViewModel, title: impl Into<String>) -> Self {
        let snapshot = Arc::new(Mutex::new(view_model.current()));
        let sink = Arc::clone(&snapshot);
        let subscription = view_model.subscribe(move |state| *sink.lock() = *state);

        Self {
            should_quit: false,
            title: title.into(),
            view_model,
            snapshot,
            _subscription: subscription,
            button_area: Rect::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last snapshot received from the view-model.
    pub fn snapshot(&self) -> CounterState {
        *self.snapshot.lock()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn button_area(&self) -> Rect {
        self.button_area
    }

    /// Records where the button was drawn so clicks can be hit-tested.
    pub fn set_button_area(&mut self, area: Rect) {
        self.button_area = area;
    }

    pub fn is_on_button(&self, column: u16, row: u16) -> bool {
        self.button_area.contains(Position::new(column, row))
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Increment => {
                self.view_model.increment();
            }
            UiAction::Quit => self.request_quit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_tracks_view_model() {
        let vm = CounterViewModel::new();
        let mut app = App::new(vm.clone(), "T");
        app.apply(UiAction::Increment);
        vm.increment();
        assert_eq!(app.snapshot(), CounterState::new(2));
    }

    #[test]
    fn quit_action_sets_flag() {
        let mut app = App::new(CounterViewModel::new(), "T");
        assert!(!app.should_quit());
        app.apply(UiAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn button_hit_test_uses_last_area() {
        let mut app = App::new(CounterViewModel::new(), "T");
        assert!(!app.is_on_button(0, 0));
        app.set_button_area(Rect::new(10, 5, 15, 3));
        assert!(app.is_on_button(10, 5));
        assert!(app.is_on_button(24, 7));
        assert!(!app.is_on_button(25, 7));
    }
}
