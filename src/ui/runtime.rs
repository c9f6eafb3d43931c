use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::counter::CounterViewModel;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Runs the counter UI until the user quits or a shutdown signal arrives.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(CounterViewModel::new(), config.ui.title.clone());
    let events = EventHandler::new(tick_rate, shutdown.clone())?;
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, mouse = config.ui.mouse, "UI started");

    loop {
        let mut button = Rect::default();
        terminal.draw(|frame| button = draw(frame, &app))?;
        app.set_button_area(button);

        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread.
    shutdown.signal();
    guard.release();
    tracing::info!(count = app.snapshot().count(), "UI stopped");
    Ok(())
}
