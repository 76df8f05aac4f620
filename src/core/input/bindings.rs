use super::actions::{GameAction, KeyAction};
use crate::models::settings::GameSettings;
use std::collections::HashMap;

/// Key name → action table, built once per session.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    game_binds: HashMap<String, GameAction>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::from_settings(&GameSettings::new())
    }

    /// Binds one key per lane from the settings, plus the fixed session keys.
    pub fn from_settings(settings: &GameSettings) -> Self {
        let mut bindings = Self {
            game_binds: HashMap::new(),
        };
        bindings.load_default_game_binds();
        bindings.apply_lane_bindings(&settings.lane_keys);
        bindings
    }

    /// Lane keys win over the fixed binds if a player maps the same key twice.
    pub fn apply_lane_bindings(&mut self, lane_keys: &[String]) {
        self.game_binds
            .retain(|_, action| !matches!(action, GameAction::Hit(_)));

        for (lane, key) in lane_keys.iter().enumerate() {
            if let Some(previous) = self.game_binds.insert(key.clone(), GameAction::Hit(lane)) {
                log::warn!("BINDINGS: {} was bound to {:?}, now lane {}", key, previous, lane);
            }
        }
    }

    pub fn resolve(&self, key: &str) -> KeyAction {
        match self.game_binds.get(key) {
            Some(action) => KeyAction::Game(*action),
            None => KeyAction::None,
        }
    }

    fn load_default_game_binds(&mut self) {
        self.game_binds
            .insert("Escape".to_string(), GameAction::ForceEnd);
        self.game_binds.insert("Enter".to_string(), GameAction::Restart);
        // F5 is the backup restart key
        self.game_binds.insert("F5".to_string(), GameAction::Restart);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}
