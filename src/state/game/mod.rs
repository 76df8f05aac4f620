//! Core gameplay session for the lane rhythm game.
//!
//! The `SessionContext` owns everything one play-through needs:
//! - Note spawning on a randomized schedule
//! - Per-frame note movement and miss sweeping
//! - Key press judgement
//! - Score and combo tracking
//! - The Playing / Finished state machine
//!
//! Nothing here renders. Every change the host should mirror is pushed as a
//! `CoreEvent` and collected with `drain_events`.

mod input;
mod notes;
mod scheduler;
mod score;
mod snapshot;

pub mod actions;

pub use notes::NoteRegistry;
pub use scheduler::{Scheduler, TimerHandle, TimerKind};
pub use score::ScoreState;

use crate::models::engine::{EngineError, NoteId, SessionState};
use crate::models::settings::GameSettings;
use crate::models::stats::{Judgement, SessionSummary};
use crate::shared::messages::CoreEvent;

/// All per-session state, created fresh for every play-through.
pub struct SessionContext {
    settings: GameSettings,
    /// Current lifecycle state.
    pub(crate) state: SessionState,
    /// Session clock in milliseconds.
    pub(crate) clock_ms: f64,
    pub(crate) notes: NoteRegistry,
    pub(crate) scheduler: Scheduler,
    pub(crate) score: ScoreState,
    /// Judgement of the last resolved note.
    pub(crate) last_judgement: Option<Judgement>,
    /// Events not yet collected by the host.
    pub(crate) events: Vec<CoreEvent>,
}

impl SessionContext {
    /// Creates a session in the `Playing` state with its timers armed.
    pub fn new(settings: GameSettings) -> Result<Self, EngineError> {
        settings.validate()?;

        let mut scheduler = Scheduler::new(&settings);
        scheduler.start(0.0);

        log::info!(
            "ENGINE: Session started ({} lanes, {:.0}ms)",
            settings.lane_count,
            settings.session_duration_ms
        );

        Ok(Self {
            notes: NoteRegistry::new(settings.lane_count),
            score: ScoreState::new(settings.miss_policy),
            events: vec![CoreEvent::SessionStarted {
                lane_count: settings.lane_count,
            }],
            state: SessionState::Playing,
            clock_ms: 0.0,
            scheduler,
            last_judgement: None,
            settings,
        })
    }

    /// Advances the session by one frame.
    ///
    /// Moves the notes, sweeps misses, then fires whatever timers came due.
    /// A finished session ignores ticks entirely.
    pub fn update(&mut self, dt_seconds: f64) {
        if !self.state.is_playing() {
            return;
        }

        let dt_seconds = dt_seconds.max(0.0);
        self.clock_ms += dt_seconds * 1000.0;
        self.notes.advance(self.settings.fall_speed * dt_seconds);
        self.sweep_misses();
        self.fire_timers();
    }

    fn fire_timers(&mut self) {
        while let Some(kind) = self.scheduler.poll(self.clock_ms) {
            if !self.state.is_playing() {
                break;
            }
            match kind {
                TimerKind::Spawn => {
                    let lane = self.scheduler.pick_lane(self.settings.lane_count);
                    if let Err(e) = self.spawn_note(lane) {
                        log::warn!("ENGINE: Scheduled spawn failed: {}", e);
                    }
                    self.scheduler.schedule_next();
                }
                TimerKind::SessionEnd => {
                    log::info!("ENGINE: Session timer elapsed");
                    self.finish();
                }
            }
        }
    }

    /// Spawns a note at the top of `lane`.
    pub fn spawn_note(&mut self, lane: usize) -> Result<NoteId, EngineError> {
        if !self.state.is_playing() {
            return Err(EngineError::InvalidStateTransition {
                from: self.state,
                requested: "spawn a note",
            });
        }

        let id = self.notes.spawn(lane, self.clock_ms)?;
        self.events.push(CoreEvent::NoteSpawned { id, lane });
        Ok(id)
    }

    /// Moves every live note down by `distance` without advancing the clock.
    pub fn advance_notes(&mut self, distance: f64) {
        if self.state.is_playing() {
            self.notes.advance(distance);
        }
    }

    /// Ends the running session on external request (e.g. Escape).
    pub fn force_end(&mut self) -> Result<(), EngineError> {
        self.state.finish()?;
        log::info!("ENGINE: Session ended by request");
        self.finish();
        Ok(())
    }

    /// Starts a new play-through. Only accepted once the session has finished.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.state.restart()?;

        let mut events = std::mem::take(&mut self.events);
        *self = Self::new(self.settings.clone())?;
        events.append(&mut self.events);
        self.events = events;
        Ok(())
    }

    /// Playing → Finished: stops both timers, clears the playfield and
    /// reports the frozen score. Repeated calls are no-ops.
    fn finish(&mut self) {
        let Ok(next) = self.state.finish() else {
            return;
        };
        self.state = next;
        self.scheduler.stop();

        for id in self.notes.clear() {
            self.events.push(CoreEvent::NoteRemoved { id });
        }

        let summary = self.score.summary();
        log::info!(
            "ENGINE: Session finished, score {} (max combo {}, accuracy {:.2}%)",
            summary.final_score,
            summary.max_combo,
            summary.accuracy
        );
        self.events.push(CoreEvent::SessionEnded(summary));
    }

    /// Takes every event produced since the last call, in emission order.
    pub fn drain_events(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn notes(&self) -> &NoteRegistry {
        &self.notes
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn summary(&self) -> SessionSummary {
        self.score.summary()
    }
}
