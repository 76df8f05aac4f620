//! Error type shared by the gameplay core.

use super::session_state::SessionState;

/// Errors raised by the note registry, the judgement path and settings loading.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A spawn or key press referenced a lane outside `0..lane_count`.
    InvalidLane { lane: usize, lane_count: usize },
    /// A session transition was requested from a state that does not allow it.
    InvalidStateTransition {
        from: SessionState,
        requested: &'static str,
    },
    /// Hit window thresholds are not strictly increasing.
    InvalidHitWindow(String),
    /// Settings could not be read, parsed or validated.
    Config(String),
}

impl EngineError {
    /// Soft errors come from host event races and are dropped silently.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidLane { .. } | EngineError::InvalidStateTransition { .. }
        )
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidLane { lane, lane_count } => {
                write!(f, "Invalid lane {} (lane count: {})", lane, lane_count)
            }
            EngineError::InvalidStateTransition { from, requested } => {
                write!(f, "Cannot {} while {:?}", requested, from)
            }
            EngineError::InvalidHitWindow(msg) => write!(f, "Invalid hit window: {}", msg),
            EngineError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}
