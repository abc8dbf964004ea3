//! Gap distribution histogram for visual feedback.
//!
//! Bins are equal-width in control-value space and converted to gap space
//! through the threshold mapping, so bin boundaries track the same log
//! scale the slider itself uses. The histogram is a pure derived view; it
//! has no effect on selection.

use super::threshold::ThresholdMapper;
use crate::models::Cue;

/// Default number of histogram bars.
pub const DEFAULT_HISTOGRAM_BARS: usize = 100;

/// One histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Number of working-set cues whose gap falls in this bin.
    pub count: usize,
    /// Lower bound of the bin's gap range (inclusive), in seconds.
    pub gap_low: f64,
    /// Upper bound of the bin's gap range (exclusive), in seconds.
    pub gap_high: f64,
}

/// The gap distribution of the working set.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bins ordered by control value: bin 0 holds the largest gaps.
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bucket the working set into `bar_count` log-scaled bins.
    ///
    /// Bin `i` covers control values `(i/N, (i+1)/N]`, i.e. the gap range
    /// `[threshold((i+1)/N), threshold(i/N))`. Each cue's bin index is
    /// computed through the inverse mapping, so every cue lands in exactly
    /// one bin and counts always sum to the working-set size.
    pub fn build(working_set: &[Cue], mapper: &ThresholdMapper, bar_count: usize) -> Self {
        let bars = bar_count.max(1);

        let mut bins: Vec<HistogramBin> = (0..bars)
            .map(|i| HistogramBin {
                count: 0,
                gap_low: mapper.threshold((i + 1) as f64 / bars as f64),
                gap_high: mapper.threshold(i as f64 / bars as f64),
            })
            .collect();

        for cue in working_set {
            let control = mapper.control_for(cue.gap);
            let idx = ((control * bars as f64).ceil() as isize - 1).clamp(0, bars as isize - 1);
            bins[idx as usize].count += 1;
        }

        Self { bins }
    }

    /// Total cue count across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// The largest single-bin count (0 for an empty working set).
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Log-compressed display height for a bin.
///
/// Empty bins render at zero height; otherwise the height interpolates
/// between `min_height` and `max_height` using `ln(count) / ln(max_count)`,
/// so a single outlier bin does not dwarf all others.
pub fn bar_height(count: usize, max_count: usize, min_height: f64, max_height: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    if max_count <= 1 {
        return max_height;
    }

    let fraction = (count as f64).ln() / (max_count as f64).ln();
    min_height + (max_height - min_height) * fraction.clamp(0.0, 1.0)
}
