//! Terminal front end (crossterm)
//!
//! Everything that touches the terminal lives here: the raw-mode screen
//! guard, key polling, frame drawing and the menus. The sim never sees any
//! of it; these modules only read `GameState` snapshots.

pub mod input;
pub mod menu;
pub mod render;
pub mod screen;

pub use input::Action;
pub use menu::MenuChoice;
pub use screen::Screen;
