//! Chapter cue selection engine.
//!
//! This module turns a list of silence-gap candidates into a chapter list
//! driven by a single slider value:
//!
//! - **Capping**: Bound the candidate list to the highest-signal cues
//! - **Range analysis**: Min/max gap statistics for the working set
//! - **Threshold mapping**: Slider position to gap threshold via log
//!   interpolation (and back)
//! - **Sensitivity**: Boundary-proximity bonus near the book's start/end
//! - **Selection**: The ordered chapter timestamp list for a threshold
//! - **Histogram**: Log-scaled gap distribution for visual feedback
//!
//! Everything here is pure and synchronous; the selector and histogram are
//! recomputed from scratch on every slider move.

mod capper;
mod histogram;
mod range;
mod selector;
mod sensitivity;
mod threshold;

// Re-export types
pub use capper::{cap_cues, CappedCues, DEFAULT_MAX_WORKING_CUES};
pub use histogram::{bar_height, Histogram, HistogramBin, DEFAULT_HISTOGRAM_BARS};
pub use range::{GapRange, FALLBACK_MAX_GAP, FALLBACK_MIN_GAP};
pub use selector::select_chapters;
pub use sensitivity::{
    boundary_proximity, effective_gap, DEFAULT_FADE_WINDOW_SECS, SENSITIVITY_MAX, SENSITIVITY_MIN,
};
pub use threshold::{ThresholdMapper, DEFAULT_CONTROL_VALUE};
