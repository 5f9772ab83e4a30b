//! Game settings and preferences
//!
//! Persisted separately from run stats. The simulation reads these once per
//! tick and never writes them; mutation goes through the engine commands.

use serde::{Deserialize, Serialize};

use crate::persistence::Storage;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "med" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Aggression multiplier: enemy shoot cooldowns divide by this, so
    /// higher means shorter cooldowns
    pub fn multiplier(self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.4,
        }
    }

    /// Enemy vertical descent rate in units/s
    pub fn descent_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 4.0,
            Difficulty::Normal => 6.0,
            Difficulty::Hard => 10.0,
        }
    }

    /// Hit points for a "big" enemy (normal enemies always have 1)
    pub fn big_enemy_health(self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => 6,
            Difficulty::Hard => 9,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
    pub difficulty: Difficulty,
    /// Particle effects on hits/destruction
    pub particles: bool,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 0.5,
            difficulty: Difficulty::Normal,
            particles: true,
            muted: false,
        }
    }
}

impl Settings {
    /// Storage key for the persisted blob
    const STORAGE_KEY: &'static str = "nova_raid_settings";

    pub fn set_volume(&mut self, v: f32) {
        self.volume = v.clamp(0.0, 1.0);
    }

    /// Set difficulty from a raw string; unrecognized values fall back to
    /// normal instead of raising.
    pub fn set_difficulty_str(&mut self, s: &str) {
        self.difficulty = Difficulty::from_str(s).unwrap_or_else(|| {
            log::warn!("unrecognized difficulty {s:?}, falling back to normal");
            Difficulty::Normal
        });
    }

    /// Load settings from storage, falling back to defaults on a missing or
    /// unreadable blob
    pub fn load<S: Storage>(storage: &S) -> Self {
        if let Some(json) = storage.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings");
                    return settings;
                }
                Err(err) => log::warn!("settings blob unreadable ({err}), using defaults"),
            }
        }
        log::info!("using default settings");
        Self::default()
    }

    /// Save settings to storage
    pub fn save<S: Storage>(&self, storage: &S) {
        match serde_json::to_string(self) {
            Ok(json) => storage.set(Self::STORAGE_KEY, &json),
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}
