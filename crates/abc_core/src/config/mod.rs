//! Configuration management.
//!
//! TOML-backed settings with atomic writes and section-level updates.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    AlignmentSettings, ConfigSection, HistogramSettings, LoggingSettings, SelectionSettings,
    Settings,
};
