pub mod config;
pub mod lifecycle;
pub mod player;
pub mod transcript;
pub mod ui;
pub mod util;

pub use config::{Config, ConfigError};
pub use lifecycle::{LifecycleStepper, Stage, StageId, STAGES};
pub use player::{
    Advance, LogEntry, LogKind, LogScript, PlaybackTicker, ScriptError, SharedPlayer,
    StagedLogPlayer,
};
pub use ui::App;
