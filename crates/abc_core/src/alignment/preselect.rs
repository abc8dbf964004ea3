//! Initial control value selection.
//!
//! At session load the slider needs a starting position. The richest known
//! external chapter set is the best prior for plausible chapter density, so
//! the preselector reverse-solves the control value whose threshold would
//! reproduce approximately that many chapters.

use crate::models::{ChapterSource, Cue};
use crate::selection::{ThresholdMapper, DEFAULT_CONTROL_VALUE};

/// Default UI grid step the initial control value is rounded up to.
pub const DEFAULT_CONTROL_GRID_STEP: f64 = 0.01;

/// Choose an initial control value for a freshly loaded session.
///
/// Picks the gap that would admit as many cues as the richest existing
/// source has chapters, then inverts the threshold mapping and rounds the
/// result up to the UI grid for control stability. Falls back to
/// [`DEFAULT_CONTROL_VALUE`] when no source has any chapters or the
/// working set is empty.
pub fn initial_control(
    working_set: &[Cue],
    mapper: &ThresholdMapper,
    sources: &[ChapterSource],
    grid_step: f64,
) -> f64 {
    let richest = sources
        .iter()
        .map(|s| s.chapter_count())
        .max()
        .unwrap_or(0);

    if richest == 0 || working_set.is_empty() {
        return DEFAULT_CONTROL_VALUE;
    }

    let mut gaps: Vec<f64> = working_set.iter().map(|c| c.gap).collect();
    gaps.sort_by(|a, b| b.total_cmp(a));

    // Admitting the k-th largest gap admits k cues; clamp for sources
    // richer than the working set.
    let target_index = (richest - 1).min(gaps.len() - 1);
    let target_gap = gaps[target_index];
    let control = snap_up_to_grid(mapper.control_for(target_gap), grid_step);

    tracing::debug!(
        "Preselected control {:.2} targeting {} chapters (gap {:.3}s)",
        control,
        richest,
        target_gap
    );

    control
}

/// Round a control value up to the nearest grid step.
fn snap_up_to_grid(control: f64, grid_step: f64) -> f64 {
    if grid_step <= 0.0 {
        return control.clamp(0.0, 1.0);
    }
    ((control / grid_step).ceil() * grid_step).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceCue;
    use crate::selection::GapRange;

    fn make_working_set() -> Vec<Cue> {
        // Gaps descending: 10, 8, 6, 4, 2.
        vec![
            Cue::new(100.0, 4.0),
            Cue::new(200.0, 10.0),
            Cue::new(300.0, 2.0),
            Cue::new(400.0, 8.0),
            Cue::new(500.0, 6.0),
        ]
    }

    fn make_source(id: &str, timestamps: &[f64]) -> ChapterSource {
        let cues = timestamps
            .iter()
            .map(|t| SourceCue::new(*t, "Chapter"))
            .collect();
        ChapterSource::new(id, id, id, cues)
    }

    #[test]
    fn reproduces_richest_source_count() {
        let working_set = make_working_set();
        let mapper = ThresholdMapper::new(GapRange::new(2.0, 10.0));
        // Anchor + 3 chapters.
        let sources = vec![
            make_source("embedded", &[0.0, 100.0, 200.0, 300.0]),
            make_source("files", &[0.0, 150.0]),
        ];

        let control = initial_control(&working_set, &mapper, &sources, 0.01);
        let threshold = mapper.threshold(control);

        // The threshold should admit about 3 cues (the 6.0s gap, rounded
        // up to the grid, may pull in no extras).
        let admitted = working_set.iter().filter(|c| c.gap >= threshold).count();
        assert_eq!(admitted, 3);
    }

    #[test]
    fn no_sources_falls_back_to_default() {
        let working_set = make_working_set();
        let mapper = ThresholdMapper::new(GapRange::new(2.0, 10.0));
        let control = initial_control(&working_set, &mapper, &[], 0.01);
        assert_eq!(control, DEFAULT_CONTROL_VALUE);
    }

    #[test]
    fn anchor_only_sources_fall_back_to_default() {
        let working_set = make_working_set();
        let mapper = ThresholdMapper::new(GapRange::new(2.0, 10.0));
        let sources = vec![make_source("embedded", &[0.0])];
        let control = initial_control(&working_set, &mapper, &sources, 0.01);
        assert_eq!(control, DEFAULT_CONTROL_VALUE);
    }

    #[test]
    fn empty_working_set_falls_back_to_default() {
        let mapper = ThresholdMapper::new(GapRange::fallback());
        let sources = vec![make_source("embedded", &[0.0, 100.0])];
        let control = initial_control(&[], &mapper, &sources, 0.01);
        assert_eq!(control, DEFAULT_CONTROL_VALUE);
    }

    #[test]
    fn richer_source_than_working_set_clamps_to_last_cue() {
        let working_set = vec![Cue::new(100.0, 4.0), Cue::new(200.0, 10.0)];
        let mapper = ThresholdMapper::new(GapRange::new(4.0, 10.0));
        // 10 chapters, but only 2 working cues.
        let timestamps: Vec<f64> = (0..=10).map(|i| i as f64 * 50.0).collect();
        let sources = vec![make_source("embedded", &timestamps)];

        let control = initial_control(&working_set, &mapper, &sources, 0.01);
        // Smallest gap -> control 1.0.
        assert_eq!(control, 1.0);
    }

    #[test]
    fn grid_rounding_rounds_up() {
        assert_eq!(snap_up_to_grid(0.333, 0.01), 0.34);
        assert_eq!(snap_up_to_grid(0.5, 0.01), 0.5);
        assert_eq!(snap_up_to_grid(0.999, 0.01), 1.0);
    }
}
