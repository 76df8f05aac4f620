//! Session settings loaded from TOML.

use crate::models::engine::{
    EngineError, FALL_SPEED, HitWindow, JUDGEMENT_LINE, NUM_LANES, SESSION_DURATION_MS,
    SPAWN_DELAY_MAX_MS, SPAWN_DELAY_MIN_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What a MISS does to the per-tier hit counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Counters survive a miss; only the combo breaks.
    KeepCounts,
    /// A miss breaks the run: PERFECT/GREAT/GOOD counters go back to zero.
    #[default]
    ResetCounts,
}

/// What happens to a matched note whose distance fits no scoring tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The note stays live and can still be hit or swept.
    RemoveOnTier,
    /// The note is destroyed once matched, scored or not.
    #[default]
    AlwaysRemove,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub lane_count: usize,
    /// Distance units per second.
    pub fall_speed: f64,
    /// Distance from the spawn point to the judgement line.
    pub judgement_line: f64,
    pub spawn_delay_min_ms: f64,
    pub spawn_delay_max_ms: f64,
    pub session_duration_ms: f64,
    pub miss_policy: MissPolicy,
    pub match_policy: MatchPolicy,
    /// One key name per lane, e.g. "KeyD".
    pub lane_keys: Vec<String>,
    /// Fixed RNG seed for reproducible spawn schedules.
    pub seed: Option<u64>,
    pub hit_window: HitWindow,
}

impl GameSettings {
    pub fn new() -> Self {
        Self {
            lane_count: NUM_LANES,
            fall_speed: FALL_SPEED,
            judgement_line: JUDGEMENT_LINE,
            spawn_delay_min_ms: SPAWN_DELAY_MIN_MS,
            spawn_delay_max_ms: SPAWN_DELAY_MAX_MS,
            session_duration_ms: SESSION_DURATION_MS,
            miss_policy: MissPolicy::default(),
            match_policy: MatchPolicy::default(),
            lane_keys: ["KeyD", "KeyF", "KeyJ", "KeyK"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            seed: None,
            hit_window: HitWindow::new(),
        }
    }

    /// Loads settings from a TOML file.
    ///
    /// A missing file falls back to defaults; a malformed or invalid one is an error.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            log::warn!("SETTINGS: {:?} not found, using defaults", path);
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        let settings: Self = toml::from_str(&content).map_err(|e| {
            log::error!("SETTINGS: Failed to parse TOML file {:?}: {}", path, e);
            EngineError::Config(e.to_string())
        })?;
        settings.validate()?;

        log::info!("SETTINGS: Loaded {:?}", path);
        Ok(settings)
    }

    /// Writes the settings as pretty TOML.
    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EngineError::Config(e.to_string()))?;
        fs::write(path, content)
            .map_err(|e| EngineError::Config(format!("Failed to write {:?}: {}", path, e)))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.lane_count == 0 {
            return Err(EngineError::Config("lane_count must be at least 1".into()));
        }
        for (name, value) in [
            ("fall_speed", self.fall_speed),
            ("judgement_line", self.judgement_line),
            ("session_duration_ms", self.session_duration_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::Config(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        let (min, max) = (self.spawn_delay_min_ms, self.spawn_delay_max_ms);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(EngineError::Config(format!(
                "invalid spawn delay range {}..={}",
                min, max
            )));
        }
        if self.lane_keys.len() != self.lane_count {
            return Err(EngineError::Config(format!(
                "expected {} lane keys, got {}",
                self.lane_count,
                self.lane_keys.len()
            )));
        }
        self.hit_window.validate()
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new()
    }
}
