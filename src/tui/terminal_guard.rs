//! RAII terminal lifecycle guard backed by crossterm.
//!
//! [`TerminalGuard`] enters raw mode and the alternate screen on construction
//! and restores the terminal on [`Drop`], including during panics and early
//! error returns. The panic hook restores the terminal *before* the default
//! panic message is printed so the message is readable.

use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Set while raw mode is on. Checked by the panic hook.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

pub type Term = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalGuard {
    pub terminal: Term,
    hook_installed: bool,
}

impl TerminalGuard {
    /// Enter raw mode and alternate screen, installing a panic-safe cleanup hook.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            restore_terminal_best_effort();
            return Err(e);
        }

        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal_best_effort();
            prev(info);
        }));

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                restore_terminal_best_effort();
                return Err(e);
            }
        };

        Ok(Self {
            terminal,
            hook_installed: true,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal_best_effort();

        if self.hook_installed {
            // The previous hook lives inside ours; fall back to the default.
            let _ = panic::take_hook();
        }
    }
}

/// Leave raw mode and the alternate screen. Safe to call repeatedly.
fn restore_terminal_best_effort() {
    if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}
