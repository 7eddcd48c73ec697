pub mod app;
pub mod components;
pub mod events;
mod terminal_guard;

pub use app::App;
pub use events::{AppEvent, PlaybackMode};
