//! The chapter engine: session-scoped wiring of the selection pipeline.
//!
//! A `ChapterEngine` is built once per editing session from the immutable
//! candidate cues. Construction runs the capper and range analysis; after
//! that every method is pure, so the caller can invoke `recompute` on every
//! slider or keyboard event and always gets a consistent snapshot back.

use crate::alignment::{
    initial_control, score_alignment, unaligned_timestamps, AlignmentReport,
    DEFAULT_ALIGNMENT_TOLERANCE_SECS, DEFAULT_CONTROL_GRID_STEP,
};
use crate::config::Settings;
use crate::models::{ChapterSource, Cue, CueSet};
use crate::selection::{
    cap_cues, select_chapters, GapRange, Histogram, ThresholdMapper, DEFAULT_FADE_WINDOW_SECS,
    DEFAULT_HISTOGRAM_BARS, DEFAULT_MAX_WORKING_CUES, FALLBACK_MAX_GAP, FALLBACK_MIN_GAP,
    SENSITIVITY_MAX, SENSITIVITY_MIN,
};

/// Tunables for the engine, typically derived from [`Settings`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum size of the working cue set.
    pub max_working_cues: usize,
    /// Fallback minimum gap (seconds) for empty working sets.
    pub fallback_min_gap: f64,
    /// Fallback maximum gap (seconds) for empty working sets.
    pub fallback_max_gap: f64,
    /// Boundary fade window in seconds.
    pub fade_window_secs: f64,
    /// Alignment tolerance in seconds.
    pub alignment_tolerance_secs: f64,
    /// Number of histogram bars.
    pub histogram_bars: usize,
    /// UI grid step for the preselected control value.
    pub control_grid_step: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_working_cues: DEFAULT_MAX_WORKING_CUES,
            fallback_min_gap: FALLBACK_MIN_GAP,
            fallback_max_gap: FALLBACK_MAX_GAP,
            fade_window_secs: DEFAULT_FADE_WINDOW_SECS,
            alignment_tolerance_secs: DEFAULT_ALIGNMENT_TOLERANCE_SECS,
            histogram_bars: DEFAULT_HISTOGRAM_BARS,
            control_grid_step: DEFAULT_CONTROL_GRID_STEP,
        }
    }
}

impl From<&Settings> for EngineConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            max_working_cues: settings.selection.max_working_cues,
            fallback_min_gap: settings.selection.fallback_min_gap,
            fallback_max_gap: settings.selection.fallback_max_gap,
            fade_window_secs: settings.selection.fade_window_secs,
            alignment_tolerance_secs: settings.alignment.tolerance_secs,
            histogram_bars: settings.histogram.bar_count,
            control_grid_step: settings.selection.control_grid_step,
        }
    }
}

/// Everything the UI needs after one control change.
#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    /// The control value the snapshot was computed for (clamped).
    pub control: f64,
    /// The sensitivity the snapshot was computed for (clamped).
    pub sensitivity: f64,
    /// The gap threshold the control value maps to.
    pub threshold: f64,
    /// Selected chapter timestamps: ascending, unique, starting at 0.
    pub chapters: Vec<f64>,
    /// Gap distribution of the working set.
    pub histogram: Histogram,
}

/// Session-scoped selection engine.
pub struct ChapterEngine {
    working_set: Vec<Cue>,
    truncated: bool,
    book_duration: f64,
    range: GapRange,
    mapper: ThresholdMapper,
    config: EngineConfig,
}

impl ChapterEngine {
    /// Build an engine from the candidate cues of one recording.
    pub fn new(cue_set: &CueSet, config: EngineConfig) -> Self {
        let capped = cap_cues(&cue_set.cues, config.max_working_cues);
        let range = GapRange::from_cues(
            &capped.cues,
            GapRange::new(config.fallback_min_gap, config.fallback_max_gap),
        );

        tracing::debug!(
            "Engine ready: {} working cues (truncated: {}), gaps {:.3}s..{:.3}s",
            capped.cues.len(),
            capped.truncated,
            range.min_gap,
            range.max_gap
        );

        Self {
            working_set: capped.cues,
            truncated: capped.truncated,
            book_duration: cue_set.book_duration,
            range,
            mapper: ThresholdMapper::new(range),
            config,
        }
    }

    /// The capped working set, sorted by timestamp.
    pub fn working_set(&self) -> &[Cue] {
        &self.working_set
    }

    /// Whether candidates were dropped to fit the working-set cap.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Whether any candidate cues are available.
    pub fn has_cues(&self) -> bool {
        !self.working_set.is_empty()
    }

    /// The gap range driving the threshold mapping.
    pub fn gap_range(&self) -> GapRange {
        self.range
    }

    /// The threshold mapper for this session.
    pub fn mapper(&self) -> &ThresholdMapper {
        &self.mapper
    }

    /// Recompute the selection and histogram for a control change.
    ///
    /// Pure and allocation-bounded; intended to run on every pointer-move
    /// event during a drag.
    pub fn recompute(&self, control: f64, sensitivity: f64) -> EngineSnapshot {
        let control = control.clamp(0.0, 1.0);
        let sensitivity = sensitivity.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX);
        let threshold = self.mapper.threshold(control);

        let chapters = select_chapters(
            &self.working_set,
            threshold,
            sensitivity,
            self.book_duration,
            self.config.fade_window_secs,
        );
        let histogram = Histogram::build(&self.working_set, &self.mapper, self.config.histogram_bars);

        EngineSnapshot {
            control,
            sensitivity,
            threshold,
            chapters,
            histogram,
        }
    }

    /// Choose the initial control value from the known chapter sources.
    pub fn initial_control(&self, sources: &[ChapterSource]) -> f64 {
        initial_control(
            &self.working_set,
            &self.mapper,
            sources,
            self.config.control_grid_step,
        )
    }

    /// Score one external source against a selection.
    pub fn alignment_with(&self, source: &ChapterSource, selection: &[f64]) -> AlignmentReport {
        score_alignment(
            &source.chapter_timestamps(),
            selection,
            self.config.alignment_tolerance_secs,
        )
    }

    /// Produce the confirmed chapter list for persistence.
    ///
    /// Merges the unaligned cues of each requested source into the
    /// threshold-derived selection. The result is ascending, unique, and
    /// starts at 0.
    pub fn finalize(
        &self,
        selection: &[f64],
        merge_source_ids: &[String],
        sources: &[ChapterSource],
    ) -> Vec<f64> {
        let mut result = selection.to_vec();

        for id in merge_source_ids {
            let Some(source) = sources.iter().find(|s| &s.id == id) else {
                tracing::warn!("Unknown chapter source '{}' requested for merge", id);
                continue;
            };
            result.extend(unaligned_timestamps(
                &source.chapter_timestamps(),
                selection,
                self.config.alignment_tolerance_secs,
            ));
        }

        result.sort_by(f64::total_cmp);
        result.dedup();
        if result.first() != Some(&0.0) {
            result.insert(0, 0.0);
        }
        result
    }
}
