//! Gameplay defaults.

/// Number of lanes in the standard layout.
pub const NUM_LANES: usize = 4;

/// Distance from the spawn point to the judgement line.
pub const JUDGEMENT_LINE: f64 = 500.0;

/// Fall speed in distance units per second.
pub const FALL_SPEED: f64 = 300.0;

/// Bounds of the random gap between two spawns (in ms).
pub const SPAWN_DELAY_MIN_MS: f64 = 400.0;
pub const SPAWN_DELAY_MAX_MS: f64 = 1200.0;

/// Length of one play-through (in ms).
pub const SESSION_DURATION_MS: f64 = 30_000.0;
