//! Raw-mode terminal setup and teardown.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Switches to raw mode on the alternate screen.
///
/// If any step fails the terminal is put back before returning the error.
pub fn init() -> io::Result<QuizTerminal> {
    setup_panic_hook();

    let result = enable_raw_mode()
        .and_then(|()| io::stdout().execute(EnterAlternateScreen).map(|_| ()))
        .and_then(|()| io::stdout().execute(Hide).map(|_| ()))
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal setup failed");
        let _ = restore();
    }

    result
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(Show)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn setup_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));
    });
}
