//! Keyboard input
//!
//! In-game input is a non-blocking poll: at most one key is taken per tick
//! and an empty poll is the normal case, not an error. Menu input blocks.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
};

use crate::sim::{PaddleDir, TickInput};

/// One in-game key, already mapped to its meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Quit,
}

impl Action {
    /// The tick input this action contributes. `Quit` never reaches the
    /// engine, so it maps to an empty input.
    pub fn to_tick_input(self) -> TickInput {
        match self {
            Action::LeftUp => TickInput { left: Some(PaddleDir::Up), right: None },
            Action::LeftDown => TickInput { left: Some(PaddleDir::Down), right: None },
            Action::RightUp => TickInput { left: None, right: Some(PaddleDir::Up) },
            Action::RightDown => TickInput { left: None, right: Some(PaddleDir::Down) },
            Action::Quit => TickInput::default(),
        }
    }
}

/// A key on a menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
    Back,
}

fn map_game_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::LeftUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::LeftDown),
        KeyCode::Up => Some(Action::RightUp),
        KeyCode::Down => Some(Action::RightDown),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Wait up to `budget` for one key press; unmapped keys read as no input.
pub fn poll_action(budget: Duration) -> io::Result<Option<Action>> {
    if event::poll(budget)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(map_game_key(key));
            }
        }
    }
    Ok(None)
}

/// Block until a key a menu understands is pressed
pub fn wait_menu_key() -> io::Result<MenuKey> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(MenuKey::Back);
            }
            match key.code {
                KeyCode::Up => return Ok(MenuKey::Up),
                KeyCode::Down => return Ok(MenuKey::Down),
                KeyCode::Enter => return Ok(MenuKey::Enter),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuKey::Back);
                }
                _ => {}
            }
        }
    }
}

/// Block until any key press (end-of-game screens)
pub fn wait_any_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Minimal line editor for the settings prompts: echoes printable keys,
/// handles Backspace, Enter submits, Esc cancels.
pub fn read_line(out: &mut impl Write) -> io::Result<Option<String>> {
    let mut buf = String::new();
    loop {
        out.flush()?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Enter => return Ok(Some(buf)),
                KeyCode::Esc => return Ok(None),
                KeyCode::Backspace => {
                    if buf.pop().is_some() {
                        queue!(out, cursor::MoveLeft(1), Print(' '), cursor::MoveLeft(1))?;
                    }
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buf.push(c);
                    queue!(out, Print(c))?;
                }
                _ => {}
            }
        }
    }
}
