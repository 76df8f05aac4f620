//! Events exchanged between the gameplay core and its host.

use crate::models::engine::NoteId;
use crate::models::stats::{Judgement, SessionSummary};

/// Host → core: input and lifecycle requests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// A lane key went down.
    LaneKeyDown { lane: usize },
    /// Host-driven frame of `dt` seconds: moves notes, sweeps misses, fires timers.
    FrameTick { dt: f64 },
    /// A raw key name (e.g. "KeyD", "Escape") resolved through the key bindings.
    KeyDown { key: String },
    /// End the running session now.
    ForceEnd,
    /// Start a new session once the current one has finished.
    RestartRequest,
    /// Stop the logic thread.
    Quit,
}

/// Core → host: everything a renderer needs to mirror the session.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    /// A fresh session began (initial start or accepted restart).
    SessionStarted { lane_count: usize },
    /// Renderer should create a visual for this note.
    NoteSpawned { id: NoteId, lane: usize },
    /// Renderer should destroy the visual of this note.
    NoteRemoved { id: NoteId },
    /// A lane key was honored, whether or not it matched a note.
    LanePressed { lane: usize },
    /// A note was resolved.
    JudgementOccurred {
        judgement: Judgement,
        lane: usize,
        score_delta: u32,
        cumulative_score: u32,
        tier_count: u32,
        combo: u32,
    },
    /// Playing → Finished. Carries the final score and tier counts.
    SessionEnded(SessionSummary),
}
