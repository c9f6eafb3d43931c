use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use state_hoisting::ui::app::App;
use state_hoisting::ui::counter::CounterViewModel;
use state_hoisting::ui::input::{handle_key, handle_mouse, map_key, map_mouse, UiAction};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn app_with_button() -> App {
    let mut app = App::new(CounterViewModel::new(), "T");
    app.set_button_area(Rect::new(30, 10, 15, 3));
    app
}

#[test]
fn increment_keys() {
    for code in [
        KeyCode::Enter,
        KeyCode::Char(' '),
        KeyCode::Char('+'),
        KeyCode::Char('i'),
    ] {
        assert_eq!(map_key(key(code)), Some(UiAction::Increment), "{code:?}");
    }
}

#[test]
fn quit_keys() {
    assert_eq!(map_key(key(KeyCode::Esc)), Some(UiAction::Quit));
    assert_eq!(map_key(key(KeyCode::Char('q'))), Some(UiAction::Quit));
    assert_eq!(map_key(ctrl('c')), Some(UiAction::Quit));
    assert_eq!(map_key(ctrl('q')), Some(UiAction::Quit));
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(map_key(key(KeyCode::Char('x'))), None);
    assert_eq!(map_key(key(KeyCode::Up)), None);
    assert_eq!(map_key(ctrl('i')), None);
}

#[test]
fn key_release_is_ignored() {
    let release = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(map_key(release), None);
}

#[test]
fn left_click_on_button_increments() {
    let app = app_with_button();
    let down = MouseEventKind::Down(MouseButton::Left);
    assert_eq!(map_mouse(&app, click(down, 30, 10)), Some(UiAction::Increment));
    assert_eq!(map_mouse(&app, click(down, 44, 12)), Some(UiAction::Increment));
}

#[test]
fn clicks_off_button_or_other_buttons_are_ignored() {
    let app = app_with_button();
    assert_eq!(
        map_mouse(&app, click(MouseEventKind::Down(MouseButton::Left), 29, 10)),
        None
    );
    assert_eq!(
        map_mouse(&app, click(MouseEventKind::Down(MouseButton::Right), 31, 11)),
        None
    );
    assert_eq!(
        map_mouse(&app, click(MouseEventKind::Up(MouseButton::Left), 31, 11)),
        None
    );
}

#[test]
fn handlers_forward_to_view_model() {
    let vm = CounterViewModel::new();
    let mut app = App::new(vm.clone(), "T");
    app.set_button_area(Rect::new(0, 0, 10, 3));

    handle_key(&mut app, key(KeyCode::Enter));
    handle_mouse(
        &mut app,
        click(MouseEventKind::Down(MouseButton::Left), 1, 1),
    );
    handle_key(&mut app, key(KeyCode::Char('z')));

    assert_eq!(vm.current().count(), 2);
    assert_eq!(app.snapshot().count(), 2);
    assert!(!app.should_quit());

    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());
}
