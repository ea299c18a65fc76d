use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Set while a session holds the terminal, so the panic hook only restores
/// what was actually changed.
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// The screen in raw mode on the alternate buffer. Dropping it, or panicking
/// while it is alive, puts the terminal back.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);

        let terminal = rollback_on_err(
            execute!(io::stdout(), EnterAlternateScreen, Hide)
                .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout()))),
            restore_terminal,
        )?;
        tracing::debug!("Terminal session entered");

        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        tracing::debug!("Terminal session restored");
    }
}

/// Runs `rollback` when a setup step failed, then passes the result through.
fn rollback_on_err<T>(result: io::Result<T>, rollback: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        rollback();
    }
    result
}

fn restore_terminal() {
    if !SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));
    });
}
