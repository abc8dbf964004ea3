//! Boundary-proximity sensitivity adjustment.
//!
//! Intros, outros, and credits near the edges of a recording often sit
//! behind shorter or more irregular silences than the main body. A single
//! global threshold under-selects them, so cues near the book's start or
//! end receive a tunable bonus on their effective gap instead of a
//! hard-coded exception.

use crate::models::Cue;

/// Default fade window in seconds (how far from an edge the bonus reaches).
pub const DEFAULT_FADE_WINDOW_SECS: f64 = 2400.0;

/// Lower bound of the user-controlled sensitivity.
pub const SENSITIVITY_MIN: f64 = -2.0;

/// Upper bound of the user-controlled sensitivity.
pub const SENSITIVITY_MAX: f64 = 2.0;

/// Compute the boundary-proximity factor for a timestamp.
///
/// The factor fades linearly from 1 at the book's start/end to 0 at
/// `fade_window` seconds into the interior. When a short book places a
/// timestamp inside both fades, the larger of the two wins (no stacking).
pub fn boundary_proximity(timestamp: f64, book_duration: f64, fade_window: f64) -> f64 {
    if fade_window <= 0.0 {
        return 0.0;
    }

    let near_start = (1.0 - timestamp / fade_window).max(0.0);
    let near_end = (1.0 - (book_duration - timestamp) / fade_window).max(0.0);
    near_start.max(near_end).min(1.0)
}

/// The gap value used for selection: the measured gap plus the
/// sensitivity-weighted proximity bonus.
///
/// Interior cues have proximity 0, so sensitivity never affects them.
pub fn effective_gap(cue: &Cue, sensitivity: f64, book_duration: f64, fade_window: f64) -> f64 {
    cue.gap + sensitivity * boundary_proximity(cue.timestamp, book_duration, fade_window)
}
