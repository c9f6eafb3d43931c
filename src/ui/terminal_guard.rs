use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type CounterTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal modes the counter UI switches on.
///
/// The modes are switched off exactly once: on drop, or from the panic hook
/// if the UI thread panics first.
pub struct TerminalGuard {
    mouse: bool,
    engaged: Arc<AtomicBool>,
}

impl TerminalGuard {
    /// Enters raw mode. Everything after that is undone by the guard, even if
    /// a later step of setup fails.
    fn engage(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            mouse,
            engaged: Arc::new(AtomicBool::new(true)),
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(guard)
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::Acquire)
    }

    fn install_panic_hook(&self) {
        let engaged = Arc::clone(&self.engaged);
        let mouse = self.mouse;
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if engaged.swap(false, Ordering::AcqRel) {
                let _ = leave_counter_modes(mouse);
            }
            previous(info);
        }));
    }

    /// Switches the terminal back to cooked mode. No-op after the first call.
    pub fn release(&self) {
        if !self.engaged.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Err(err) = leave_counter_modes(self.mouse) {
            tracing::warn!(error = %err, "Failed to restore terminal");
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Runs every step even when an earlier one fails; reports the first error.
fn leave_counter_modes(mouse: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mouse_result = if mouse {
        execute!(stdout, DisableMouseCapture)
    } else {
        Ok(())
    };
    let screen_result = execute!(stdout, LeaveAlternateScreen, Show);
    let raw_result = disable_raw_mode();
    mouse_result.and(screen_result).and(raw_result)
}

pub fn setup_terminal(mouse: bool) -> io::Result<(CounterTerminal, TerminalGuard)> {
    let guard = TerminalGuard::engage(mouse)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    guard.install_panic_hook();
    Ok((terminal, guard))
}
