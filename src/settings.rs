//! Game settings
//!
//! Loaded from a JSON file; any missing field takes its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};

/// Simulation and driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spawner RNG seed
    pub seed: u64,
    /// Starting difficulty level
    pub level: u32,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Player ===
    /// Player speed (pixels per tick)
    pub player_speed: f32,
    /// Player heading change per tick while a turn key is held (degrees)
    pub player_turn_degrees: f32,

    // === Headless driver ===
    /// Ticks the native binary simulates before exiting
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 1,
            level: 1,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,

            player_speed: 5.0,
            player_turn_degrees: 3.0,

            demo_ticks: 600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}; using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Wall-clock length of one tick (zero rate is treated as one tick per second)
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "level": 7 }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.level, 7);
        assert_eq!(settings.screen_width, 800.0);
        assert_eq!(settings.tick_rate, 60);
        assert_eq!(settings.player_turn_degrees, 3.0);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: 9,
            player_speed: 4.5,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json(r#"{ "level": "hard" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let settings = Settings::load_from("/nonexistent/missiles-settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("missiles-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "level": 12, "demo_ticks": 5 }"#).unwrap();
        let settings = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings.level, 12);
        assert_eq!(settings.demo_ticks, 5);
    }

    #[test]
    fn test_tick_duration() {
        let settings = Settings::default();
        let micros = settings.tick_duration().as_micros();
        assert!((16_666..=16_667).contains(&micros));
    }
}
