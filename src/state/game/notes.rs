//! Note registry and miss sweeping.

use super::SessionContext;
use crate::models::engine::{EngineError, NoteData, NoteId};
use crate::models::stats::{Judgement, JudgementOutcome};
use crate::shared::messages::CoreEvent;

/// Owns every live note of a session.
#[derive(Debug, Clone)]
pub struct NoteRegistry {
    notes: Vec<NoteData>,
    lane_count: usize,
    next_id: NoteId,
}

impl NoteRegistry {
    pub fn new(lane_count: usize) -> Self {
        Self {
            notes: Vec::new(),
            lane_count,
            next_id: 0,
        }
    }

    /// Creates a note at the top of `lane`.
    pub fn spawn(&mut self, lane: usize, now_ms: f64) -> Result<NoteId, EngineError> {
        if lane >= self.lane_count {
            return Err(EngineError::InvalidLane {
                lane,
                lane_count: self.lane_count,
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(NoteData::new(id, lane, now_ms));
        Ok(id)
    }

    /// Moves every live note down by `distance`. Negative input is ignored.
    pub fn advance(&mut self, distance: f64) {
        let distance = distance.max(0.0);
        for note in &mut self.notes {
            note.position += distance;
        }
    }

    /// Destroys a note. Returns `None` if it was already gone.
    pub fn remove(&mut self, id: NoteId) -> Option<NoteData> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// Live notes in spawn order. The iterator is `Clone`, so it can be restarted.
    pub fn iter(&self) -> std::slice::Iter<'_, NoteData> {
        self.notes.iter()
    }

    pub fn get(&self, id: NoteId) -> Option<&NoteData> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Destroys every live note and returns their ids.
    pub fn clear(&mut self) -> Vec<NoteId> {
        self.notes.drain(..).map(|n| n.id).collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl SessionContext {
    /// Expires every note that overshot the line past the MISS threshold.
    ///
    /// Candidates are collected before anything is removed, so removal never
    /// skips or revisits a note. Does nothing unless the session is playing.
    pub fn sweep_misses(&mut self) -> Vec<JudgementOutcome> {
        if !self.state.is_playing() {
            return Vec::new();
        }

        let line = self.settings.judgement_line;
        let window = self.settings.hit_window;
        let expired: Vec<NoteId> = self
            .notes
            .iter()
            .filter(|n| window.is_missed(n.distance_to(line)))
            .map(|n| n.id)
            .collect();

        let mut outcomes = Vec::with_capacity(expired.len());
        for id in expired {
            let Some(note) = self.notes.remove(id) else {
                continue;
            };
            self.events.push(CoreEvent::NoteRemoved { id });

            let outcome = JudgementOutcome::new(
                Judgement::Miss,
                note.lane,
                note.distance_to(line),
                self.clock_ms,
            );
            self.apply_outcome(outcome);
            outcomes.push(outcome);
        }
        outcomes
    }
}
