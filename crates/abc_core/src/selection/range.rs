//! Gap range statistics for the working cue set.

use crate::models::Cue;

/// Fallback minimum gap (seconds) when the working set is empty.
pub const FALLBACK_MIN_GAP: f64 = 1.0;

/// Fallback maximum gap (seconds) when the working set is empty.
pub const FALLBACK_MAX_GAP: f64 = 10.0;

/// Min/max gap statistics derived from the working set.
///
/// An empty working set yields the caller-supplied fallback range so that
/// downstream consumers can still render a usable, if inert, control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapRange {
    /// Smallest gap in the working set, in seconds.
    pub min_gap: f64,
    /// Largest gap in the working set, in seconds.
    pub max_gap: f64,
}

impl GapRange {
    /// Create a range from explicit bounds.
    pub fn new(min_gap: f64, max_gap: f64) -> Self {
        Self { min_gap, max_gap }
    }

    /// The default fallback range for empty working sets.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_MIN_GAP, FALLBACK_MAX_GAP)
    }

    /// Derive the gap range of a working set.
    ///
    /// Returns `fallback` when `cues` is empty.
    pub fn from_cues(cues: &[Cue], fallback: GapRange) -> Self {
        if cues.is_empty() {
            return fallback;
        }

        let mut min_gap = f64::INFINITY;
        let mut max_gap = f64::NEG_INFINITY;
        for cue in cues {
            min_gap = min_gap.min(cue.gap);
            max_gap = max_gap.max(cue.gap);
        }

        Self { min_gap, max_gap }
    }

    /// Whether the range has no usable spread (single cue or identical gaps).
    pub fn is_degenerate(&self) -> bool {
        self.max_gap <= self.min_gap
    }
}
