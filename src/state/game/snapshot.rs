//! Snapshot creation for SessionContext - get_snapshot

use super::SessionContext;
use crate::shared::snapshot::{GameplaySnapshot, NoteSnapshot};

impl SessionContext {
    /// Creates a snapshot of the current session state for rendering.
    pub fn get_snapshot(&self) -> GameplaySnapshot {
        let line = self.settings.judgement_line;

        let notes = self
            .notes
            .iter()
            .map(|n| NoteSnapshot {
                id: n.id,
                lane: n.lane,
                position: n.position,
                distance: n.distance_to(line),
            })
            .collect();

        let time_left_ms = self
            .scheduler
            .session_end_ms()
            .map(|end| (end - self.clock_ms).max(0.0))
            .unwrap_or(0.0);

        GameplaySnapshot {
            clock_ms: self.clock_ms,
            timestamp: std::time::Instant::now(),
            state: self.state,
            lane_count: self.settings.lane_count,
            judgement_line: line,
            notes,
            score: self.score.score,
            combo: self.score.combo,
            max_combo: self.score.max_combo,
            hit_stats: self.score.hit_stats.clone(),
            accuracy: self.score.hit_stats.calculate_accuracy(),
            last_judgement: self.last_judgement,
            time_left_ms,
        }
    }
}
