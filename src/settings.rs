//! Settings for the headless driver
//!
//! Game rules are fixed (see `consts`); these only shape how the native
//! binary lays out the screen and plays itself. Stored as JSON.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scene::Layout;

/// Driver settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Screen width in points
    pub screen_width: f32,
    /// Screen height in points
    pub screen_height: f32,
    /// Presentation frame period in milliseconds
    pub frame_ms: u64,

    // === Autopilot ===
    /// Steer automatically
    pub autopilot: bool,
    /// Autopilot RNG seed
    pub seed: u64,

    // === Session ===
    /// Runs to play before exiting (restart after each game over)
    pub runs: u32,
    /// Stop once a single run survives this many ticks (0 = no cap)
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 400.0,
            screen_height: 800.0,
            frame_ms: 16,

            autopilot: true,
            seed: 0x5eed,

            runs: 3,
            max_ticks: 3000,
        }
    }
}

impl Settings {
    pub fn layout(&self) -> Layout {
        Layout::for_screen(self.screen_width, self.screen_height)
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Could not save settings {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "autopilot": false }"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert!(!settings.autopilot);
        assert_eq!(settings.screen_width, 400.0);
        assert_eq!(settings.runs, 3);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/road-fighter/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "road-fighter-settings-{}.json",
            std::process::id()
        ));
        let settings = Settings {
            seed: 99,
            runs: 1,
            ..Default::default()
        };
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_layout_and_frame_period() {
        let settings = Settings {
            frame_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_period(), Duration::from_millis(1));
        assert_eq!(settings.layout().max_height, 900.0);
    }
}
