//! Live note structure.

use serde::{Deserialize, Serialize};

/// Unique identifier of a note within a session.
pub type NoteId = u64;

/// A single falling note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteData {
    /// Unique id, never reused within a session.
    pub id: NoteId,
    /// Which lane (0-indexed).
    pub lane: usize,
    /// Distance travelled since spawn. Only ever increases.
    pub position: f64,
    /// Session clock when the note was spawned (in milliseconds).
    pub spawned_at_ms: f64,
}

impl NoteData {
    /// Creates a note at the top of the travel path.
    pub fn new(id: NoteId, lane: usize, spawned_at_ms: f64) -> Self {
        Self {
            id,
            lane,
            position: 0.0,
            spawned_at_ms,
        }
    }

    /// Signed distance to the judgement line.
    /// Negative while approaching, positive once the note has passed it.
    pub fn distance_to(&self, judgement_line: f64) -> f64 {
        self.position - judgement_line
    }
}
