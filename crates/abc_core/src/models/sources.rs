//! External chapter sources used as comparison baselines.
//!
//! A chapter source is a chapter set obtained from somewhere other than the
//! silence-gap analysis: embedded container metadata, an external catalog,
//! or the boundaries of the files the book was assembled from.

use serde::{Deserialize, Serialize};

/// A chapter entry from an external source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCue {
    /// Chapter start time in seconds.
    pub timestamp: f64,
    /// Chapter title as reported by the source.
    pub title: String,
}

impl SourceCue {
    /// Create a new source cue.
    pub fn new(timestamp: f64, title: impl Into<String>) -> Self {
        Self {
            timestamp,
            title: title.into(),
        }
    }
}

/// A chapter set from an external source.
///
/// By convention the first cue sits at timestamp 0 (the book start). That
/// entry is a fixed anchor, not a detected chapter, and is excluded from
/// chapter comparisons and counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSource {
    /// Stable identifier for this source.
    pub id: String,
    /// Human-readable source name (e.g. "Embedded metadata").
    pub name: String,
    /// Abbreviated name for compact display.
    pub short_name: String,
    /// Chapter entries, ordered by timestamp.
    pub cues: Vec<SourceCue>,
}

impl ChapterSource {
    /// Create a new chapter source.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        short_name: impl Into<String>,
        cues: Vec<SourceCue>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: short_name.into(),
            cues,
        }
    }

    /// Chapter timestamps with the book-start anchor excluded.
    pub fn chapter_timestamps(&self) -> Vec<f64> {
        self.cues
            .iter()
            .skip(if self.starts_with_anchor() { 1 } else { 0 })
            .map(|c| c.timestamp)
            .collect()
    }

    /// Number of chapters, excluding the book-start anchor.
    pub fn chapter_count(&self) -> usize {
        self.cues.len() - if self.starts_with_anchor() { 1 } else { 0 }
    }

    fn starts_with_anchor(&self) -> bool {
        self.cues.first().is_some_and(|c| c.timestamp <= 0.0)
    }
}
