mod common;

use common::buffer_text;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use state_hoisting::ui::app::App;
use state_hoisting::ui::counter::{CounterState, CounterViewModel};
use state_hoisting::ui::input::UiAction;
use state_hoisting::ui::render::draw;

fn render(app: &App, width: u16, height: u16) -> (String, Rect) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut button = Rect::default();
    terminal.draw(|frame| button = draw(frame, app)).unwrap();
    (buffer_text(terminal.backend().buffer()), button)
}

#[test]
fn initial_frame_shows_title_count_and_button() {
    let app = App::new(CounterViewModel::new(), "STATE HOISTING");
    let (text, _) = render(&app, 80, 24);

    assert!(text.contains("STATE HOISTING"));
    assert!(text.contains("Count: 0"));
    assert!(text.contains("Even"));
    assert!(text.contains("Increment"));
    assert!(text.contains(concat!("v", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn frame_reflects_latest_snapshot() {
    let mut app = App::new(CounterViewModel::new(), "STATE HOISTING");
    app.apply(UiAction::Increment);
    let (text, _) = render(&app, 80, 24);

    assert!(text.contains("Count: 1"));
    assert!(text.contains("Odd"));
}

#[test]
fn frame_follows_external_view_model_updates() {
    let vm = CounterViewModel::with_initial(CounterState::new(41));
    let app = App::new(vm.clone(), "T");
    vm.increment();
    let (text, _) = render(&app, 80, 24);

    assert!(text.contains("Count: 42"));
    assert!(text.contains("Even"));
}

#[test]
fn returned_button_area_is_inside_body_and_hit_testable() {
    let mut app = App::new(CounterViewModel::new(), "T");
    let (_, button) = render(&app, 80, 24);

    assert!(button.width > 0 && button.height > 0);
    assert!(button.y >= 3 && button.bottom() <= 21);

    app.set_button_area(button);
    assert!(app.is_on_button(button.x, button.y));
    assert_eq!(app.button_area(), button);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = App::new(CounterViewModel::new(), "STATE HOISTING");
    let (_, button) = render(&app, 6, 3);
    assert_eq!(button.height, 0);
}
