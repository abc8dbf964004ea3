//! Candidate cue capping.
//!
//! The analysis backend can report thousands of candidate cues for a long
//! recording. The interactive engine works on a bounded set; gap magnitude
//! is the best available proxy for "plausibly a real chapter boundary", so
//! capping keeps the largest-gap candidates rather than an arbitrary prefix.

use crate::models::Cue;

/// Default maximum size of the working cue set.
pub const DEFAULT_MAX_WORKING_CUES: usize = 500;

/// A capped working set, with a flag for the UI to report truncation.
#[derive(Debug, Clone)]
pub struct CappedCues {
    /// The working cues, sorted by timestamp ascending.
    pub cues: Vec<Cue>,
    /// Whether candidates were dropped to fit the cap.
    pub truncated: bool,
}

/// Cap a candidate list to at most `max_cues` entries.
///
/// If the candidates already fit, they are returned unchanged apart from
/// being re-sorted by timestamp. Otherwise the `max_cues` largest-gap
/// candidates are kept (ties keep input order) and re-sorted by timestamp.
pub fn cap_cues(candidates: &[Cue], max_cues: usize) -> CappedCues {
    let mut cues = candidates.to_vec();

    let truncated = cues.len() > max_cues;
    if truncated {
        tracing::debug!(
            "Capping {} candidate cues to the {} largest gaps",
            cues.len(),
            max_cues
        );
        // Stable sort keeps input order for equal gaps, so the cap is
        // deterministic.
        cues.sort_by(|a, b| b.gap.total_cmp(&a.gap));
        cues.truncate(max_cues);
    }

    cues.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    CappedCues { cues, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cues(pairs: &[(f64, f64)]) -> Vec<Cue> {
        pairs.iter().map(|(t, g)| Cue::new(*t, *g)).collect()
    }

    #[test]
    fn small_input_passes_through_sorted() {
        let cues = make_cues(&[(50.0, 8.0), (10.0, 2.0), (90.0, 1.0)]);
        let capped = cap_cues(&cues, 500);

        assert!(!capped.truncated);
        assert_eq!(capped.cues.len(), 3);
        let times: Vec<f64> = capped.cues.iter().map(|c| c.timestamp).collect();
        assert_eq!(times, vec![10.0, 50.0, 90.0]);
    }

    #[test]
    fn oversize_input_keeps_largest_gaps() {
        let cues = make_cues(&[(10.0, 2.0), (20.0, 9.0), (30.0, 1.0), (40.0, 7.0)]);
        let capped = cap_cues(&cues, 2);

        assert!(capped.truncated);
        assert_eq!(capped.cues.len(), 2);
        // The 9.0 and 7.0 gaps survive, re-sorted by timestamp.
        let times: Vec<f64> = capped.cues.iter().map(|c| c.timestamp).collect();
        assert_eq!(times, vec![20.0, 40.0]);
    }

    #[test]
    fn gap_ties_keep_input_order() {
        let cues = make_cues(&[(10.0, 5.0), (20.0, 5.0), (30.0, 5.0)]);
        let capped = cap_cues(&cues, 2);

        assert!(capped.truncated);
        let times: Vec<f64> = capped.cues.iter().map(|c| c.timestamp).collect();
        assert_eq!(times, vec![10.0, 20.0]);
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        let cues = make_cues(&[(10.0, 2.0), (20.0, 9.0)]);
        let capped = cap_cues(&cues, 2);
        assert!(!capped.truncated);
        assert_eq!(capped.cues.len(), 2);
    }

    #[test]
    fn empty_input_stays_empty() {
        let capped = cap_cues(&[], 500);
        assert!(!capped.truncated);
        assert!(capped.cues.is_empty());
    }
}
