use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the user asked for, independent of how they asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Increment,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return Some(UiAction::Quit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(UiAction::Quit),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Char('i') => {
            Some(UiAction::Increment)
        }
        _ => None,
    }
}

/// Left click inside the button increments; everything else is ignored.
pub fn map_mouse(app: &App, mouse: MouseEvent) -> Option<UiAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if app.is_on_button(mouse.column, mouse.row) => {
            Some(UiAction::Increment)
        }
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if let Some(action) = map_key(key) {
        tracing::trace!(?action, code = ?key.code, "key mapped");
        app.apply(action);
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let Some(action) = map_mouse(app, mouse) {
        tracing::trace!(?action, column = mouse.column, row = mouse.row, "click mapped");
        app.apply(action);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
