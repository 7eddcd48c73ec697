//! Reveal counter for the staged log.

use super::entry::LogEntry;
use super::script::LogScript;

/// Outcome of a single [`StagedLogPlayer::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// One more line became visible; carries the new reveal count
    Revealed(usize),
    /// The fully revealed script was cleared and the cycle restarted
    Wrapped,
}

/// Replays a [`LogScript`] one line per tick, looping forever.
///
/// The only mutable state is the reveal count, which climbs from 0 to the
/// script length and then wraps back to 0. Rendering reads the state through
/// [`current_view`](Self::current_view) and
/// [`cursor_visible`](Self::cursor_visible), neither of which mutates it.
#[derive(Debug, Clone)]
pub struct StagedLogPlayer {
    script: LogScript,
    revealed: usize,
    cycles: u64,
}

impl StagedLogPlayer {
    pub fn new(script: LogScript) -> Self {
        Self {
            script,
            revealed: 0,
            cycles: 0,
        }
    }

    /// Step the reveal count, wrapping to 0 once the script has been held fully revealed
    pub fn advance(&mut self) -> Advance {
        if self.revealed < self.script.len() {
            self.revealed += 1;
            Advance::Revealed(self.revealed)
        } else {
            self.revealed = 0;
            self.cycles += 1;
            Advance::Wrapped
        }
    }

    /// Entries to draw, in script order.
    ///
    /// Includes the pending line at index `revealed_count` while the script
    /// is still emitting, so one more entry is shown than has been revealed.
    pub fn current_view(&self) -> &[LogEntry] {
        let end = (self.revealed + 1).min(self.script.len());
        &self.script.entries()[..end]
    }

    pub fn cursor_visible(&self) -> bool {
        self.revealed < self.script.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed == self.script.len()
    }

    /// Number of wraps since construction
    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    /// Restart from an empty reveal without counting a completed cycle
    pub fn reset(&mut self) {
        self.revealed = 0;
    }

    pub fn script(&self) -> &LogScript {
        &self.script
    }
}

impl Default for StagedLogPlayer {
    fn default() -> Self {
        Self::new(LogScript::worker_demo())
    }
}
