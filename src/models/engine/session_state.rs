//! Playing / Finished lifecycle of a play-through.

use super::error::EngineError;
use serde::{Deserialize, Serialize};

/// Lifecycle of one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Spawning, judging and input are live.
    #[default]
    Playing,
    /// Terminal until a restart is accepted.
    Finished,
}

impl SessionState {
    pub fn is_playing(self) -> bool {
        self == SessionState::Playing
    }

    /// Playing -> Finished. Fails if the session already ended.
    pub fn finish(self) -> Result<SessionState, EngineError> {
        match self {
            SessionState::Playing => Ok(SessionState::Finished),
            SessionState::Finished => Err(EngineError::InvalidStateTransition {
                from: self,
                requested: "end session",
            }),
        }
    }

    /// Finished -> Playing. Fails while a session is still running.
    pub fn restart(self) -> Result<SessionState, EngineError> {
        match self {
            SessionState::Finished => Ok(SessionState::Playing),
            SessionState::Playing => Err(EngineError::InvalidStateTransition {
                from: self,
                requested: "restart",
            }),
        }
    }
}
