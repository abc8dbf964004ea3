//! Nearest-neighbor timestamp matching under a tolerance window.
//!
//! Matching is existential per existing cue, not a bijection: one selected
//! timestamp may cover several nearby existing cues and vice versa. That is
//! a deliberate simplification for a human-in-the-loop visual aid, not a
//! formal assignment algorithm.

/// Default alignment tolerance in seconds.
pub const DEFAULT_ALIGNMENT_TOLERANCE_SECS: f64 = 5.0;

/// Alignment statistics for one existing chapter set against a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentReport {
    /// Existing cues with a selected timestamp within tolerance.
    pub aligned: usize,
    /// Total existing cues checked.
    pub total: usize,
    /// Rounded percentage in [0, 100]; 0 when there is nothing to check.
    pub percentage: u8,
}

/// Find the timestamp in a sorted list nearest to the target.
pub fn nearest_timestamp(sorted: &[f64], target: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    // Binary search for the insertion point, then compare its neighbors.
    let idx = sorted.partition_point(|&t| t < target);
    if idx == 0 {
        Some(sorted[0])
    } else if idx >= sorted.len() {
        Some(sorted[sorted.len() - 1])
    } else {
        let before = sorted[idx - 1];
        let after = sorted[idx];
        if target - before <= after - target {
            Some(before)
        } else {
            Some(after)
        }
    }
}

/// Whether some selected timestamp lies within `tolerance` of `timestamp`.
pub fn is_aligned(selected: &[f64], timestamp: f64, tolerance: f64) -> bool {
    nearest_timestamp(selected, timestamp)
        .is_some_and(|nearest| (nearest - timestamp).abs() <= tolerance)
}

/// Score how well a selection covers an existing chapter set.
///
/// Each existing cue is checked independently against the selection. An
/// empty existing list scores 0, never NaN.
pub fn score_alignment(existing: &[f64], selected: &[f64], tolerance: f64) -> AlignmentReport {
    if existing.is_empty() {
        return AlignmentReport {
            aligned: 0,
            total: 0,
            percentage: 0,
        };
    }

    let aligned = existing
        .iter()
        .filter(|&&t| is_aligned(selected, t, tolerance))
        .count();
    let percentage = (100.0 * aligned as f64 / existing.len() as f64).round() as u8;

    AlignmentReport {
        aligned,
        total: existing.len(),
        percentage,
    }
}

/// Existing cues with no selected timestamp within tolerance.
///
/// These are the cues a user can choose to merge into the final chapter
/// list in addition to the threshold-derived selection.
pub fn unaligned_timestamps(existing: &[f64], selected: &[f64], tolerance: f64) -> Vec<f64> {
    existing
        .iter()
        .copied()
        .filter(|&t| !is_aligned(selected, t, tolerance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_picks_closer_neighbor() {
        let sorted = vec![0.0, 100.0, 200.0, 300.0];
        assert_eq!(nearest_timestamp(&sorted, 40.0), Some(0.0));
        assert_eq!(nearest_timestamp(&sorted, 60.0), Some(100.0));
        assert_eq!(nearest_timestamp(&sorted, 100.0), Some(100.0));
        assert_eq!(nearest_timestamp(&sorted, 400.0), Some(300.0));
        assert_eq!(nearest_timestamp(&sorted, -50.0), Some(0.0));
    }

    #[test]
    fn nearest_of_empty_is_none() {
        assert_eq!(nearest_timestamp(&[], 10.0), None);
    }

    #[test]
    fn tolerance_window_covers_nearby_cues() {
        // Both 48 and 52 are within 5s of the selected 50.
        let report = score_alignment(&[48.0, 52.0], &[0.0, 50.0], 5.0);
        assert_eq!(report.aligned, 2);
        assert_eq!(report.total, 2);
        assert_eq!(report.percentage, 100);
    }

    #[test]
    fn self_alignment_is_perfect() {
        let timestamps = vec![10.0, 55.5, 120.0, 3600.0];
        let report = score_alignment(&timestamps, &timestamps, 5.0);
        assert_eq!(report.percentage, 100);
    }

    #[test]
    fn empty_existing_scores_zero() {
        let report = score_alignment(&[], &[0.0, 50.0], 5.0);
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn empty_selection_scores_zero() {
        let report = score_alignment(&[10.0, 20.0], &[], 5.0);
        assert_eq!(report.aligned, 0);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn percentage_rounds() {
        // 1 of 3 aligned = 33.33% -> 33.
        let report = score_alignment(&[10.0, 200.0, 300.0], &[10.0], 5.0);
        assert_eq!(report.percentage, 33);

        // 2 of 3 aligned = 66.67% -> 67.
        let report = score_alignment(&[10.0, 20.0, 300.0], &[10.0, 20.0], 5.0);
        assert_eq!(report.percentage, 67);
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        assert!(is_aligned(&[50.0], 45.0, 5.0));
        assert!(!is_aligned(&[50.0], 44.9, 5.0));
    }

    #[test]
    fn unaligned_returns_uncovered_cues() {
        let existing = vec![48.0, 52.0, 200.0, 355.0];
        let unaligned = unaligned_timestamps(&existing, &[0.0, 50.0, 350.0], 5.0);
        assert_eq!(unaligned, vec![200.0]);
    }
}
