//! Canonical action enums shared between input layers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Press on a lane.
    Hit(usize),
    /// End the running session.
    ForceEnd,
    /// Start a new session after the current one finished.
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameAction),
    None,
}
