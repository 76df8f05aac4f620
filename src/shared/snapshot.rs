//! Render snapshots for inter-thread communication.
//!
//! Snapshots are immutable captures of session state sent from the logic thread
//! to whatever renders the playfield. This decouples game logic from rendering.

use crate::models::engine::{NoteId, SessionState};
use crate::models::stats::{HitStats, Judgement};
use std::time::Instant;

/// A live note as seen by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteSnapshot {
    pub id: NoteId,
    pub lane: usize,
    /// Distance travelled since spawn.
    pub position: f64,
    /// Signed distance to the judgement line (negative while approaching).
    pub distance: f64,
}

/// Snapshot of the gameplay state for rendering.
#[derive(Clone, Debug)]
pub struct GameplaySnapshot {
    /// Session clock in milliseconds.
    pub clock_ms: f64,
    /// Wall-clock instant the snapshot was taken.
    pub timestamp: Instant,
    pub state: SessionState,
    pub lane_count: usize,
    pub judgement_line: f64,
    /// Notes currently falling.
    pub notes: Vec<NoteSnapshot>,
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub hit_stats: HitStats,
    pub accuracy: f64,
    pub last_judgement: Option<Judgement>,
    /// Milliseconds until the end-of-session timer fires.
    pub time_left_ms: f64,
}
