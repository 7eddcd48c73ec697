use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::player::{LogEntry, LogScript, ScriptError, DEFAULT_TICK_INTERVAL};
use crate::ui::components::{parse_hex_color, CURSOR, DEFAULT_WINDOW_TITLE};
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_CURSOR_BLINK: Duration = Duration::from_millis(800);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid script: {0}")]
    InvalidScript(#[from] ScriptError),
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Time between log line reveals
    pub tick_interval: Duration,
    /// Time between redraws
    pub frame_interval: Duration,
    /// Length of one full cursor blink (on + off)
    pub cursor_blink: Duration,
    /// Draw the lifecycle stages beside the terminal
    pub show_lifecycle: bool,
    pub window_title: String,
    pub cursor_color: Color,
    /// Log lines to replay
    pub script: LogScript,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            cursor_blink: DEFAULT_CURSOR_BLINK,
            show_lifecycle: true,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            cursor_color: CURSOR,
            script: LogScript::worker_demo(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlPlaybackConfig {
    pub tick_ms: Option<u64>,
    pub frame_ms: Option<u64>,
    pub cursor_blink_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlDisplayConfig {
    pub show_lifecycle: Option<bool>,
    pub window_title: Option<String>,
    pub cursor_color: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub playback: Option<TomlPlaybackConfig>,
    pub display: Option<TomlDisplayConfig>,
    pub script: Option<Vec<LogEntry>>,
}

fn millis(name: &'static str, value: u64) -> Result<Duration, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroInterval(name));
    }
    Ok(Duration::from_millis(value))
}

impl Config {
    /// Load configuration from the default location, merging with defaults.
    ///
    /// Never fails: a broken file is logged and ignored.
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %config_file.display(),
                    error = %e,
                    "Falling back to default configuration"
                );
                Config::default()
            }
        }
    }

    /// Load a specific config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();

        if let Some(playback) = toml_config.playback {
            if let Some(ms) = playback.tick_ms {
                config.tick_interval = millis("playback.tick_ms", ms)?;
            }
            if let Some(ms) = playback.frame_ms {
                config.frame_interval = millis("playback.frame_ms", ms)?;
            }
            if let Some(ms) = playback.cursor_blink_ms {
                config.cursor_blink = millis("playback.cursor_blink_ms", ms)?;
            }
        }

        if let Some(display) = toml_config.display {
            if let Some(show) = display.show_lifecycle {
                config.show_lifecycle = show;
            }
            if let Some(title) = display.window_title {
                config.window_title = title;
            }
            if let Some(hex) = display.cursor_color {
                config.cursor_color =
                    parse_hex_color(&hex).ok_or(ConfigError::InvalidColor(hex))?;
            }
        }

        if let Some(entries) = toml_config.script {
            config.script = LogScript::new(entries)?;
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_script(mut self, script: LogScript) -> Self {
        self.script = script;
        self
    }
}
