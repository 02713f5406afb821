//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed ticks only, no wall-clock time
//! - Seeded RNG only (opening serve)
//! - No rendering or terminal dependencies
//!
//! The game loop owns a `GameState` and calls `tick` once per interval;
//! everything else in the crate only reads the state to draw it.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Edge, bounce_walls, edge_reached, paddle_hit};
pub use state::{Ball, Field, GameState, Mode, Paddle, Phase};
pub use tick::{PaddleDir, TickInput, tick};
