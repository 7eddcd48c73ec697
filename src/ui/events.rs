use crate::player::Advance;

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// The playback ticker advanced the log
    Playback(Advance),

    /// Redraw timer fired
    Frame,

    /// Request to quit the application
    Quit,
}

/// Whether the playback ticker is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Playing,
    /// Ticker released; the log only moves on manual steps
    Paused,
}
