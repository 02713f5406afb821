//! tty-pong - a terminal two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, mode rules)
//! - `ui`: Terminal rendering, input polling, menus (crossterm)
//! - `settings`: Persisted game configuration
//! - `scores`: Match history log

pub mod scores;
pub mod settings;
pub mod sim;
pub mod ui;

pub use scores::ScoreLog;
pub use settings::Config;

/// Game configuration constants
pub mod consts {
    /// Base tick interval in milliseconds; divided by the configured speed
    pub const BASE_TICK_MS: f32 = 100.0;

    /// Smallest field dimension the settings layer will accept
    pub const MIN_FIELD: i32 = 5;

    /// On-disk file names, resolved relative to the working directory
    pub const CONFIG_FILE: &str = "config.json";
    pub const SCORES_FILE: &str = "scores.json";
}
