//! Bidirectional mapping between the control value and a gap threshold.
//!
//! The control value is the normalized [0, 1] slider position. Silence gaps
//! span orders of magnitude (fractions of a second up to tens of seconds),
//! so the mapping interpolates logarithmically between the working set's
//! extremes: control 0 maps to the largest gap (strictest threshold, fewest
//! chapters) and control 1 to the smallest (most permissive).

use super::range::GapRange;

/// Default control value when no better prior is available.
pub const DEFAULT_CONTROL_VALUE: f64 = 0.5;

/// Smallest gap the mapper will take a logarithm of.
const GAP_FLOOR: f64 = 1e-3;

/// Maps a control value in [0, 1] to a gap threshold and back.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdMapper {
    min_gap: f64,
    max_gap: f64,
}

impl ThresholdMapper {
    /// Create a mapper for the given gap range.
    ///
    /// Gaps are clamped to a small positive floor so the interpolation
    /// never evaluates `ln` of a non-positive value.
    pub fn new(range: GapRange) -> Self {
        Self {
            min_gap: range.min_gap.max(GAP_FLOOR),
            max_gap: range.max_gap.max(GAP_FLOOR),
        }
    }

    /// Map a control value to a gap threshold.
    ///
    /// Control 0 yields `max_gap`, control 1 yields `min_gap`. Degenerate
    /// ranges (`max_gap <= min_gap`) yield a constant `min_gap`.
    pub fn threshold(&self, control: f64) -> f64 {
        if self.max_gap <= self.min_gap {
            return self.min_gap;
        }

        let s = control.clamp(0.0, 1.0);
        (self.max_gap.ln() * (1.0 - s) + self.min_gap.ln() * s).exp()
    }

    /// Solve for the control value that produces the given threshold.
    ///
    /// The gap is clamped into the mapper's range, so the result is always
    /// in [0, 1]. Degenerate ranges yield [`DEFAULT_CONTROL_VALUE`].
    pub fn control_for(&self, gap: f64) -> f64 {
        if self.max_gap <= self.min_gap {
            return DEFAULT_CONTROL_VALUE;
        }

        let clamped = gap.clamp(self.min_gap, self.max_gap);
        let control = (self.max_gap / clamped).ln() / (self.max_gap / self.min_gap).ln();
        control.clamp(0.0, 1.0)
    }

    /// The smallest threshold this mapper can produce.
    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    /// The largest threshold this mapper can produce.
    pub fn max_gap(&self) -> f64 {
        self.max_gap
    }
}
