//! Terminal state guard for guaranteed cleanup.
//!
//! Raw mode and the alternate screen are entered by [`TerminalGuard::enter`]
//! and restored when the guard is dropped, whether the app returns normally,
//! bails out with `?`, or panics (together with [`install_panic_hook`]).

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        // Construct before the screen switch so a failure there still restores raw mode
        let guard = Self { active: true };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    /// Restore the terminal and surface any error.
    ///
    /// After calling this, Drop becomes a no-op.
    pub fn restore(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            // Best effort cleanup - errors can't propagate out of Drop
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, Show)?;
    stdout.flush()?;
    Ok(())
}

/// Install a panic hook that restores terminal state before printing the panic message.
///
/// This should be called before the terminal is switched to raw mode.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        original_hook(panic_info);
    }));
}
