mod settings;

pub use settings::{Config, ConfigError, EXAMPLE_CONFIG};
