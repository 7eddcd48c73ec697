//! Staged log playback for the worker terminal demo.
//!
//! [`StagedLogPlayer`] is a pure reveal counter over a [`LogScript`];
//! [`PlaybackTicker`] drives it on a timer.

mod entry;
mod scheduler;
mod script;
mod state;

pub use entry::{ColorToken, Glyph, LogEntry, LogKind};
pub use scheduler::{PlaybackTicker, SharedPlayer, DEFAULT_TICK_INTERVAL};
pub use script::{LogScript, ScriptError};
pub use state::{Advance, StagedLogPlayer};
