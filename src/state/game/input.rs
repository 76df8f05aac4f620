//! Input handling for SessionContext - handle_input, process_hit

use super::SessionContext;
use crate::core::input::actions::GameAction;
use crate::models::engine::{EngineError, NoteId};
use crate::models::settings::MatchPolicy;
use crate::models::stats::JudgementOutcome;
use crate::shared::messages::CoreEvent;

impl SessionContext {
    /// Handles a gameplay action coming from the key bindings.
    ///
    /// Soft errors (bad lane, transition races) are logged and dropped.
    pub fn handle_input(&mut self, action: GameAction) {
        let result = match action {
            GameAction::Hit(lane) => self.process_hit(lane).map(|_| ()),
            GameAction::ForceEnd => self.force_end(),
            GameAction::Restart => self.restart(),
        };

        if let Err(e) = result {
            if e.is_soft() {
                log::debug!("ENGINE: Ignoring {:?}: {}", action, e);
            } else {
                log::warn!("ENGINE: {:?} failed: {}", action, e);
            }
        }
    }

    /// Judges a key press on `lane` against the live notes.
    ///
    /// The closest note in that lane strictly inside the MISS threshold is the
    /// candidate; ties go to the earliest spawned. Returns `Ok(None)` when the
    /// press resolves nothing, including every press made while not playing.
    pub fn process_hit(&mut self, lane: usize) -> Result<Option<JudgementOutcome>, EngineError> {
        if !self.state.is_playing() {
            return Ok(None);
        }
        if lane >= self.settings.lane_count {
            return Err(EngineError::InvalidLane {
                lane,
                lane_count: self.settings.lane_count,
            });
        }

        self.events.push(CoreEvent::LanePressed { lane });

        let line = self.settings.judgement_line;
        let window = self.settings.hit_window;
        let mut best: Option<(NoteId, f64)> = None;

        for note in self.notes.iter().filter(|n| n.lane == lane) {
            let distance = note.distance_to(line);
            if !window.in_range(distance) {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance.abs() >= best_distance.abs() => {}
                _ => best = Some((note.id, distance)),
            }
        }

        let Some((id, distance)) = best else {
            return Ok(None);
        };

        match window.judge(distance) {
            Some(judgement) => {
                self.notes.remove(id);
                self.events.push(CoreEvent::NoteRemoved { id });

                let outcome = JudgementOutcome::new(judgement, lane, distance, self.clock_ms);
                self.apply_outcome(outcome);
                Ok(Some(outcome))
            }
            None => {
                if self.settings.match_policy == MatchPolicy::AlwaysRemove {
                    self.notes.remove(id);
                    self.events.push(CoreEvent::NoteRemoved { id });
                    log::debug!(
                        "ENGINE: Note {} on lane {} matched outside scoring tiers (distance {:.1}), removed",
                        id,
                        lane,
                        distance
                    );
                }
                Ok(None)
            }
        }
    }
}
