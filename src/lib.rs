//! Lane-based rhythm game core.
//!
//! Notes fall toward a judgement line on a randomized schedule; key presses
//! are matched against them and scored by distance. The host drives the
//! session with frame ticks and key events and mirrors it through `CoreEvent`s.

pub mod core;
pub mod logic;
pub mod models;
pub mod shared;
pub mod state;
pub mod system;

pub use models::engine::{EngineError, HitWindow, SessionState};
pub use models::settings::{GameSettings, MatchPolicy, MissPolicy};
pub use models::stats::{HitStats, Judgement, JudgementOutcome, SessionSummary};
pub use shared::messages::{CoreEvent, HostEvent};
pub use state::SessionContext;
