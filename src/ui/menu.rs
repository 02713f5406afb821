//! Menu screens: main menu, settings editor, results viewer
//!
//! All three follow the same pattern: redraw the whole screen, block for
//! one key, repeat. The highlighted row uses reverse video.

use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use super::input::{self, MenuKey};
use crate::scores::{self, ScoreLog};
use crate::settings::Config;
use crate::sim::Mode;

/// What the player picked on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(Mode),
    Results,
    Settings,
    Exit,
}

const MAIN_ITEMS: [&str; 6] = [
    "Play: Player vs Player",
    "Play: Player vs Computer",
    "Play: Player vs Wall",
    "Show Results",
    "Settings",
    "Exit",
];

/// How many history rows the results screen shows
const RESULT_ROWS: usize = 15;

fn draw_items<S: AsRef<str>>(
    out: &mut impl Write,
    title: &str,
    items: &[S],
    selected: usize,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(1, 1), Print(title))?;
    for (i, item) in items.iter().enumerate() {
        queue!(out, MoveTo(5, (3 + i) as u16))?;
        if i == selected {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(item.as_ref()),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(item.as_ref()))?;
        }
    }
    out.flush()
}

pub fn main_menu(out: &mut impl Write) -> io::Result<MenuChoice> {
    let mut selected = 0;
    loop {
        draw_items(out, "PONG - Main Menu", &MAIN_ITEMS, selected)?;
        match input::wait_menu_key()? {
            MenuKey::Up => selected = (selected + MAIN_ITEMS.len() - 1) % MAIN_ITEMS.len(),
            MenuKey::Down => selected = (selected + 1) % MAIN_ITEMS.len(),
            MenuKey::Enter => {
                return Ok(match selected {
                    0 => MenuChoice::Play(Mode::player_vs_player()),
                    1 => MenuChoice::Play(Mode::player_vs_bot()),
                    2 => MenuChoice::Play(Mode::wall_practice()),
                    3 => MenuChoice::Results,
                    4 => MenuChoice::Settings,
                    _ => MenuChoice::Exit,
                });
            }
            MenuKey::Back => return Ok(MenuChoice::Exit),
        }
    }
}

fn prompt(out: &mut impl Write, row: u16, label: &str) -> io::Result<Option<String>> {
    queue!(out, MoveTo(5, row), Clear(ClearType::UntilNewLine), Print(label))?;
    out.flush()?;
    input::read_line(out)
}

fn prompt_parse<T: FromStr>(out: &mut impl Write, row: u16, label: &str) -> io::Result<Option<T>> {
    Ok(prompt(out, row, label)?.and_then(|s| s.trim().parse().ok()))
}

/// Settings editor. Values are sanitized after every change so dependent
/// clamps (paddle height vs field height) hold immediately; the file is
/// only written on "Save and exit".
pub fn settings_menu(out: &mut impl Write, config: &mut Config, path: &Path) -> io::Result<()> {
    let mut selected = 0;
    loop {
        let items = [
            format!("Change speed (now {:.1})", config.speed),
            format!("Change max score (now {})", config.max_score),
            format!("Change field width (now {})", config.field_width),
            format!("Change field height (now {})", config.field_height),
            format!("Change paddle height (now {})", config.paddle_height),
            format!("Change player 1 name (now {})", config.left_name),
            format!("Change player 2 name (now {})", config.right_name),
            "Save and exit".to_owned(),
        ];
        let prompt_row = (3 + items.len() + 1) as u16;

        draw_items(out, "Game settings", &items, selected)?;
        match input::wait_menu_key()? {
            MenuKey::Up => selected = (selected + items.len() - 1) % items.len(),
            MenuKey::Down => selected = (selected + 1) % items.len(),
            MenuKey::Enter => {
                match selected {
                    0 => {
                        if let Some(v) = prompt_parse(out, prompt_row, "Enter new speed (e.g. 1.0): ")? {
                            config.speed = v;
                        }
                    }
                    1 => {
                        if let Some(v) = prompt_parse(out, prompt_row, "Enter max score: ")? {
                            config.max_score = v;
                        }
                    }
                    2 => {
                        if let Some(v) = prompt_parse(out, prompt_row, "Enter field width: ")? {
                            config.field_width = v;
                        }
                    }
                    3 => {
                        if let Some(v) = prompt_parse(out, prompt_row, "Enter field height: ")? {
                            config.field_height = v;
                        }
                    }
                    4 => {
                        if let Some(v) = prompt_parse(out, prompt_row, "Enter paddle height: ")? {
                            config.paddle_height = v;
                        }
                    }
                    5 => {
                        if let Some(name) = prompt(out, prompt_row, "Enter player 1 name: ")? {
                            let name = name.trim();
                            if !name.is_empty() {
                                config.left_name = name.to_owned();
                            }
                        }
                    }
                    6 => {
                        if let Some(name) = prompt(out, prompt_row, "Enter player 2 name: ")? {
                            let name = name.trim();
                            if !name.is_empty() {
                                config.right_name = name.to_owned();
                            }
                        }
                    }
                    _ => {
                        if let Err(err) = config.save(path) {
                            log::warn!("Could not save config: {err}");
                        }
                        return Ok(());
                    }
                }
                *config = config.clone().sanitized();
            }
            // Leave without writing the file
            MenuKey::Back => return Ok(()),
        }
    }
}

/// Match history viewer, newest first
pub fn results_screen(out: &mut impl Write, scores_path: &Path) -> io::Result<()> {
    let history = ScoreLog::load(scores_path);
    let now = scores::now_ms();

    queue!(out, Clear(ClearType::All), MoveTo(1, 1), Print("Results"))?;
    let shown = if history.is_empty() {
        queue!(out, MoveTo(5, 3), Print("No matches recorded yet."))?;
        1
    } else {
        let recent = history.entries.iter().rev().take(RESULT_ROWS);
        let mut rows = 0;
        for (i, entry) in recent.enumerate() {
            let line = format!(
                "{}  ({})",
                entry.summary(),
                scores::format_age(now, entry.played_at_ms)
            );
            queue!(out, MoveTo(5, (3 + i) as u16), Print(line))?;
            rows = i + 1;
        }
        rows
    };

    let footer_row = (3 + shown + 1) as u16;
    queue!(out, MoveTo(5, footer_row), Print("Press 'q' to return to the menu"))?;
    out.flush()?;

    while input::wait_menu_key()? != MenuKey::Back {}
    Ok(())
}
