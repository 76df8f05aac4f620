//! State management module.
//!
//! This module contains the gameplay session and the traits the logic thread
//! uses to drive it:
//! - `SessionContext` - One play-through (notes, timers, judgement, score)
//! - `Snapshot` / `Update` - Rendering snapshots and frame ticks

pub mod game;
pub mod traits;

// Re-exports for convenient access
pub use game::{NoteRegistry, ScoreState, SessionContext};
pub use traits::{Snapshot, Update};
