//! Chapter selection from the working cue set.

use super::sensitivity::effective_gap;
use crate::models::Cue;

/// Select the chapter timestamps for a threshold.
///
/// A cue is admitted when its sensitivity-adjusted gap reaches the
/// threshold (inclusive, so a cue exactly at the threshold is never
/// dropped). The book start is always a chapter boundary, so 0 is always
/// present even when no cue qualifies.
///
/// `working_set` must be sorted by timestamp ascending (the capper
/// guarantees this), which keeps this a single O(n) pass per slider move.
pub fn select_chapters(
    working_set: &[Cue],
    threshold: f64,
    sensitivity: f64,
    book_duration: f64,
    fade_window: f64,
) -> Vec<f64> {
    debug_assert!(
        working_set
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp),
        "working set must be sorted by timestamp"
    );

    let mut result = Vec::with_capacity(working_set.len() + 1);
    result.push(0.0);

    for cue in working_set {
        if effective_gap(cue, sensitivity, book_duration, fade_window) >= threshold {
            result.push(cue.timestamp);
        }
    }

    // A cue can sit at the book start itself; keep the anchor unique.
    result.dedup();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cues(pairs: &[(f64, f64)]) -> Vec<Cue> {
        pairs.iter().map(|(t, g)| Cue::new(*t, *g)).collect()
    }

    #[test]
    fn threshold_filters_by_gap() {
        let cues = make_cues(&[(10.0, 2.0), (50.0, 8.0), (90.0, 1.0)]);
        let selected = select_chapters(&cues, 5.0, 0.0, 100.0, 40.0);
        assert_eq!(selected, vec![0.0, 50.0]);
    }

    #[test]
    fn sensitivity_admits_boundary_cue() {
        // The cue at 90s is 10s from the end of a 100s book. With a 40s
        // fade window its proximity is 0.75, so sensitivity 2 lifts its
        // effective gap from 1.0 to 2.5.
        let cues = make_cues(&[(10.0, 2.0), (50.0, 8.0), (90.0, 1.0)]);

        let without = select_chapters(&cues, 2.5, 0.0, 100.0, 40.0);
        assert_eq!(without, vec![0.0, 50.0]);

        let with = select_chapters(&cues, 2.5, 2.0, 100.0, 40.0);
        assert_eq!(with, vec![0.0, 50.0, 90.0]);
    }

    #[test]
    fn threshold_comparison_is_inclusive() {
        let cues = make_cues(&[(3000.0, 5.0)]);
        let selected = select_chapters(&cues, 5.0, 0.0, 6000.0, 2400.0);
        assert_eq!(selected, vec![0.0, 3000.0]);
    }

    #[test]
    fn empty_working_set_yields_anchor_only() {
        let selected = select_chapters(&[], 5.0, 0.0, 100.0, 40.0);
        assert_eq!(selected, vec![0.0]);
    }

    #[test]
    fn anchor_is_present_when_no_cue_qualifies() {
        let cues = make_cues(&[(3000.0, 1.0)]);
        let selected = select_chapters(&cues, 100.0, 0.0, 6000.0, 2400.0);
        assert_eq!(selected, vec![0.0]);
    }

    #[test]
    fn cue_at_book_start_does_not_duplicate_anchor() {
        let cues = make_cues(&[(0.0, 9.0), (3000.0, 6.0)]);
        let selected = select_chapters(&cues, 5.0, 0.0, 6000.0, 2400.0);
        assert_eq!(selected, vec![0.0, 3000.0]);
    }

    #[test]
    fn selection_grows_with_lower_threshold() {
        let cues = make_cues(&[(10.0, 2.0), (50.0, 8.0), (90.0, 4.0)]);
        let strict = select_chapters(&cues, 8.0, 0.0, 100.0, 0.0);
        let loose = select_chapters(&cues, 2.0, 0.0, 100.0, 0.0);
        assert!(strict.len() <= loose.len());
        assert_eq!(loose, vec![0.0, 10.0, 50.0, 90.0]);
    }
}
