//! Editing session bookkeeping.
//!
//! The backend collaborator delivers one payload per editing session: the
//! candidate cues, the book duration, and the known chapter sources. This
//! module parses that payload and holds it, together with the engine built
//! from it, for the lifetime of the session. Control value and sensitivity
//! stay with the interactive caller; nothing here retains recompute history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{ChapterEngine, EngineConfig, EngineSnapshot};
use crate::models::{ChapterSource, Cue, CueSet};

/// Errors that can occur while loading a session payload.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The payload is not valid JSON for the expected shape.
    #[error("Failed to parse session payload: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The book duration is missing, non-finite, or not positive.
    #[error("Book duration must be a positive number, got {0}")]
    InvalidDuration(f64),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The per-session payload from the analysis backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// Candidate cues from silence analysis.
    pub cues: Vec<Cue>,
    /// Total duration of the recording in seconds.
    pub book_duration: f64,
    /// Chapter sets from other sources, for comparison.
    #[serde(default)]
    pub sources: Vec<ChapterSource>,
}

impl SessionData {
    /// Parse a backend payload from JSON.
    pub fn from_json(payload: &str) -> SessionResult<Self> {
        let data: SessionData = serde_json::from_str(payload)?;
        if !data.book_duration.is_finite() || data.book_duration <= 0.0 {
            return Err(SessionError::InvalidDuration(data.book_duration));
        }
        Ok(data)
    }

    /// The cue set for engine construction.
    pub fn cue_set(&self) -> CueSet {
        CueSet::new(self.cues.clone(), self.book_duration)
    }
}

/// One editing session: immutable inputs plus the engine built from them.
pub struct EditSession {
    data: SessionData,
    engine: ChapterEngine,
    loaded_at: DateTime<Utc>,
}

impl EditSession {
    /// Start a session from parsed backend data.
    pub fn new(data: SessionData, config: EngineConfig) -> Self {
        let engine = ChapterEngine::new(&data.cue_set(), config);
        tracing::info!(
            "Editing session started: {} candidate cues, {} sources, {:.0}s book",
            data.cues.len(),
            data.sources.len(),
            data.book_duration
        );

        Self {
            data,
            engine,
            loaded_at: Utc::now(),
        }
    }

    /// Start a session directly from a JSON payload.
    pub fn from_json(payload: &str, config: EngineConfig) -> SessionResult<Self> {
        Ok(Self::new(SessionData::from_json(payload)?, config))
    }

    /// The selection engine for this session.
    pub fn engine(&self) -> &ChapterEngine {
        &self.engine
    }

    /// The known external chapter sources.
    pub fn sources(&self) -> &[ChapterSource] {
        &self.data.sources
    }

    /// When the session was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// The control value the UI should start at.
    pub fn initial_control(&self) -> f64 {
        self.engine.initial_control(&self.data.sources)
    }

    /// Recompute selection state for a control change.
    pub fn recompute(&self, control: f64, sensitivity: f64) -> EngineSnapshot {
        self.engine.recompute(control, sensitivity)
    }

    /// Produce the confirmed chapter list for persistence.
    ///
    /// Persistence itself (and any debouncing of it) is the caller's
    /// responsibility; this only assembles the final timestamp list.
    pub fn confirm(&self, snapshot: &EngineSnapshot, merge_source_ids: &[String]) -> Vec<f64> {
        self.engine
            .finalize(&snapshot.chapters, merge_source_ids, &self.data.sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "cues": [
            {"timestamp": 10.0, "gap": 2.0},
            {"timestamp": 50.0, "gap": 8.0},
            {"timestamp": 90.0, "gap": 1.0}
        ],
        "bookDuration": 100.0,
        "sources": [
            {
                "id": "embedded",
                "name": "Embedded metadata",
                "shortName": "Emb",
                "cues": [
                    {"timestamp": 0.0, "title": "Start"},
                    {"timestamp": 48.0, "title": "Chapter 1"}
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_backend_payload() {
        let data = SessionData::from_json(PAYLOAD).unwrap();
        assert_eq!(data.cues.len(), 3);
        assert_eq!(data.book_duration, 100.0);
        assert_eq!(data.sources.len(), 1);
        assert_eq!(data.sources[0].short_name, "Emb");
    }

    #[test]
    fn missing_sources_default_to_empty() {
        let data = SessionData::from_json(r#"{"cues": [], "bookDuration": 60.0}"#).unwrap();
        assert!(data.sources.is_empty());
    }

    #[test]
    fn rejects_non_positive_duration() {
        let err = SessionData::from_json(r#"{"cues": [], "bookDuration": 0.0}"#).unwrap_err();
        assert!(matches!(err, SessionError::InvalidDuration(_)));
    }

    #[test]
    fn rejects_malformed_payload() {
        let err = SessionData::from_json("not json").unwrap_err();
        assert!(matches!(err, SessionError::ParseError(_)));
    }

    #[test]
    fn session_wires_engine_and_sources() {
        let session = EditSession::from_json(PAYLOAD, EngineConfig::default()).unwrap();

        let control = session.initial_control();
        let snapshot = session.recompute(control, 0.0);
        assert_eq!(snapshot.chapters[0], 0.0);

        // One chapter beyond the anchor in the richest source, so the
        // preselection admits one cue.
        assert_eq!(snapshot.chapters.len(), 2);
    }

    #[test]
    fn confirm_merges_requested_sources() {
        let session = EditSession::from_json(PAYLOAD, EngineConfig::default()).unwrap();
        let snapshot = session.recompute(0.0, 0.0);

        // Control 0 selects only the largest gap (the 50s cue); 48 is
        // within tolerance of it, so merging adds nothing new.
        let confirmed = session.confirm(&snapshot, &[String::from("embedded")]);
        assert_eq!(confirmed, snapshot.chapters);
    }
}
