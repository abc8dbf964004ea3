//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates. Every field has a serde default so partial configs load.

use serde::{Deserialize, Serialize};

use crate::alignment::{DEFAULT_ALIGNMENT_TOLERANCE_SECS, DEFAULT_CONTROL_GRID_STEP};
use crate::logging::LogLevel;
use crate::selection::{
    DEFAULT_FADE_WINDOW_SECS, DEFAULT_HISTOGRAM_BARS, DEFAULT_MAX_WORKING_CUES, FALLBACK_MAX_GAP,
    FALLBACK_MIN_GAP,
};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Cue selection settings.
    #[serde(default)]
    pub selection: SelectionSettings,

    /// Alignment comparison settings.
    #[serde(default)]
    pub alignment: AlignmentSettings,

    /// Histogram display settings.
    #[serde(default)]
    pub histogram: HistogramSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Cue selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Maximum size of the working cue set.
    #[serde(default = "default_max_working_cues")]
    pub max_working_cues: usize,

    /// Fallback minimum gap (seconds) when no cues are available.
    #[serde(default = "default_fallback_min_gap")]
    pub fallback_min_gap: f64,

    /// Fallback maximum gap (seconds) when no cues are available.
    #[serde(default = "default_fallback_max_gap")]
    pub fallback_max_gap: f64,

    /// Boundary fade window in seconds.
    #[serde(default = "default_fade_window")]
    pub fade_window_secs: f64,

    /// UI grid step the preselected control value is rounded to.
    #[serde(default = "default_grid_step")]
    pub control_grid_step: f64,
}

fn default_max_working_cues() -> usize {
    DEFAULT_MAX_WORKING_CUES
}

fn default_fallback_min_gap() -> f64 {
    FALLBACK_MIN_GAP
}

fn default_fallback_max_gap() -> f64 {
    FALLBACK_MAX_GAP
}

fn default_fade_window() -> f64 {
    DEFAULT_FADE_WINDOW_SECS
}

fn default_grid_step() -> f64 {
    DEFAULT_CONTROL_GRID_STEP
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            max_working_cues: default_max_working_cues(),
            fallback_min_gap: default_fallback_min_gap(),
            fallback_max_gap: default_fallback_max_gap(),
            fade_window_secs: default_fade_window(),
            control_grid_step: default_grid_step(),
        }
    }
}

/// Alignment comparison configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentSettings {
    /// Tolerance window in seconds for matching timestamps.
    #[serde(default = "default_tolerance")]
    pub tolerance_secs: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_ALIGNMENT_TOLERANCE_SECS
}

impl Default for AlignmentSettings {
    fn default() -> Self {
        Self {
            tolerance_secs: default_tolerance(),
        }
    }
}

/// Histogram display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramSettings {
    /// Number of histogram bars.
    #[serde(default = "default_bar_count")]
    pub bar_count: usize,

    /// Minimum display height for a non-empty bar, in pixels.
    #[serde(default = "default_min_bar_height")]
    pub min_bar_height: f64,

    /// Maximum display height for a bar, in pixels.
    #[serde(default = "default_max_bar_height")]
    pub max_bar_height: f64,
}

fn default_bar_count() -> usize {
    DEFAULT_HISTOGRAM_BARS
}

fn default_min_bar_height() -> f64 {
    4.0
}

fn default_max_bar_height() -> f64 {
    64.0
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self {
            bar_count: default_bar_count(),
            min_bar_height: default_min_bar_height(),
            max_bar_height: default_max_bar_height(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write logs to a daily-rolling file.
    #[serde(default)]
    pub log_to_file: bool,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: false,
            logs_folder: default_logs_folder(),
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Selection,
    Alignment,
    Histogram,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Selection => "selection",
            ConfigSection::Alignment => "alignment",
            ConfigSection::Histogram => "histogram",
            ConfigSection::Logging => "logging",
        }
    }
}
