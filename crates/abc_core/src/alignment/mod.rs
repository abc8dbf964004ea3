//! Alignment scoring against external chapter sources.
//!
//! This module compares the engine's selected timestamps with chapter sets
//! from other sources (embedded metadata, external catalogs, file splits):
//!
//! - **Matching**: Nearest-neighbor alignment under a fixed tolerance
//! - **Scoring**: Percentage of an existing chapter set that the selection
//!   covers, plus the gradient color helper for displaying it
//! - **Preselection**: An initial control value that reproduces the richest
//!   known chapter count

mod color;
mod matcher;
mod preselect;

// Re-export types
pub use color::{alignment_color, ColorScheme, Rgb};
pub use matcher::{
    is_aligned, nearest_timestamp, score_alignment, unaligned_timestamps, AlignmentReport,
    DEFAULT_ALIGNMENT_TOLERANCE_SECS,
};
pub use preselect::{initial_control, DEFAULT_CONTROL_GRID_STEP};
