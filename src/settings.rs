//! Game settings and preferences
//!
//! Loaded once at startup and treated as immutable for the lifetime of a
//! session. Validation lives here, at the configuration boundary: the
//! engine assumes every value it receives is already in range.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_TICK_MS, MIN_FIELD};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tick rate multiplier; higher is faster
    pub speed: f32,
    /// Score either side must reach to end a session
    pub max_score: u32,
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_height: i32,
    /// Display names for the two sides
    pub left_name: String,
    pub right_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: 1.0,
            max_score: 5,
            field_width: 40,
            field_height: 20,
            paddle_height: 4,
            left_name: "Player 1".to_owned(),
            right_name: "Player 2".to_owned(),
        }
    }
}

impl Config {
    /// Clamp every field into its documented range. Applied on every load
    /// so a hand-edited file cannot hand the engine a bad precondition.
    pub fn sanitized(mut self) -> Self {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            self.speed = 1.0;
        }
        self.speed = self.speed.clamp(0.1, 10.0);
        self.max_score = self.max_score.max(1);
        self.field_width = self.field_width.max(MIN_FIELD);
        self.field_height = self.field_height.max(MIN_FIELD);
        self.paddle_height = self.paddle_height.clamp(1, self.field_height - 3);
        self
    }

    /// Inter-tick delay derived from `speed`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis((BASE_TICK_MS / self.speed).round().max(1.0) as u64)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable. The result is always sanitized.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Config>(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(err) => {
                    log::warn!("Config file {} is corrupt ({err}); using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}; using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Cannot read config {} ({err}); using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write to `path` as pretty-printed JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
