//! Cue types: detected silence-gap candidates.
//!
//! A cue marks a position in the recording where the analysis backend found
//! a stretch of silence. The length of that silence (the "gap") is the
//! primary significance signal for chapter detection.

use serde::{Deserialize, Serialize};

/// A single candidate chapter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Position in the recording, in seconds from the start.
    pub timestamp: f64,
    /// Duration of the silence immediately preceding this cue, in seconds.
    pub gap: f64,
}

impl Cue {
    /// Create a new cue.
    pub fn new(timestamp: f64, gap: f64) -> Self {
        Self { timestamp, gap }
    }
}

/// The candidate cues for one recording, plus the shared book duration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueSet {
    /// Candidate cues. Unordered on input; call [`CueSet::sort_by_time`]
    /// before relying on ordering.
    pub cues: Vec<Cue>,
    /// Total duration of the recording in seconds.
    pub book_duration: f64,
}

impl CueSet {
    /// Create a cue set from candidates and the book duration.
    pub fn new(cues: Vec<Cue>, book_duration: f64) -> Self {
        Self {
            cues,
            book_duration,
        }
    }

    /// Get the number of candidate cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Check if there are no candidate cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Sort cues by timestamp ascending.
    pub fn sort_by_time(&mut self) {
        self.cues
            .sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
    }

    /// Get an iterator over the cues.
    pub fn iter(&self) -> impl Iterator<Item = &Cue> {
        self.cues.iter()
    }
}
