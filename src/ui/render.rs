//! Frame drawing
//!
//! Pure presentation: reads a `GameState` snapshot once per tick and queues
//! the whole frame, then flushes. Field walls are `-`, paddles `|`, the
//! ball `O`, with the score centered on the row under the top wall.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::settings::Config;
use crate::sim::{GameState, Mode, Paddle};

const WALL: char = '-';
const PADDLE: char = '|';
const BALL: char = 'O';

/// Display labels for the two sides in the current mode
pub fn side_labels(mode: &Mode, config: &Config) -> (String, String) {
    match mode {
        Mode::PlayerVsPlayer { .. } => (config.left_name.clone(), config.right_name.clone()),
        Mode::PlayerVsBot { .. } => (config.left_name.clone(), "Computer".to_owned()),
        Mode::WallPractice { .. } => (config.left_name.clone(), "Wall".to_owned()),
    }
}

fn score_line(mode: &Mode) -> String {
    match *mode {
        Mode::PlayerVsPlayer { left, right } | Mode::PlayerVsBot { left, right } => {
            format!("Score: {left} | {right}")
        }
        Mode::WallPractice { score } => format!("Score: {score}"),
    }
}

fn hint(mode: &Mode) -> &'static str {
    match mode {
        Mode::PlayerVsPlayer { .. } => "w/s: left paddle   up/down: right paddle   q: quit",
        Mode::PlayerVsBot { .. } | Mode::WallPractice { .. } => "w/s: move   q: quit",
    }
}

fn draw_paddle(out: &mut impl Write, paddle: &Paddle) -> io::Result<()> {
    for i in 0..paddle.height {
        queue!(out, MoveTo(paddle.x as u16, (paddle.y + i) as u16), Print(PADDLE))?;
    }
    Ok(())
}

/// Draw one frame of play
pub fn draw(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    let w = state.field.width;
    let h = state.field.height;

    queue!(out, Clear(ClearType::All))?;

    let wall_row: String = std::iter::repeat_n(WALL, w as usize).collect();
    queue!(out, MoveTo(0, 0), Print(&wall_row))?;
    queue!(out, MoveTo(0, (h - 1) as u16), Print(&wall_row))?;

    let score = score_line(&state.mode);
    let score_col = (w as usize).saturating_sub(score.len()) as u16 / 2;
    queue!(out, MoveTo(score_col, 1), Print(&score))?;

    draw_paddle(out, &state.left)?;
    match state.mode {
        // The right column is a reflecting wall, not a paddle
        Mode::WallPractice { .. } => {
            for y in 1..h - 1 {
                queue!(out, MoveTo((w - 1) as u16, y as u16), Print(PADDLE))?;
            }
        }
        _ => draw_paddle(out, &state.right)?,
    }

    // The ball can sit one cell past an edge on goal ticks; keep the draw
    // inside the field
    let bx = state.ball.x.clamp(0, w - 1) as u16;
    let by = state.ball.y.clamp(0, h - 1) as u16;
    queue!(out, MoveTo(bx, by), Print(BALL))?;

    queue!(out, MoveTo(0, h as u16), Print(hint(&state.mode)))?;
    out.flush()
}

/// End-of-session screen shown after natural termination
pub fn draw_game_over(out: &mut impl Write, state: &GameState, config: &Config) -> io::Result<()> {
    let (left_label, right_label) = side_labels(&state.mode, config);
    let result = match state.mode {
        Mode::PlayerVsPlayer { left, right } | Mode::PlayerVsBot { left, right } => {
            let winner = if left > right { &left_label } else { &right_label };
            format!("{left_label} {left} - {right} {right_label}   {winner} wins!")
        }
        Mode::WallPractice { score } => format!("Rally finished at {score}"),
    };

    let w = state.field.width as usize;
    let mid = (state.field.height / 2) as u16;
    let center = |text: &str| (w.saturating_sub(text.len()) / 2) as u16;

    queue!(out, Clear(ClearType::All))?;
    queue!(out, MoveTo(center("GAME OVER"), mid - 1), Print("GAME OVER"))?;
    queue!(out, MoveTo(center(&result), mid + 1), Print(&result))?;
    let prompt = "Press any key to return to the menu";
    queue!(out, MoveTo(center(prompt), mid + 3), Print(prompt))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line_per_mode() {
        assert_eq!(
            score_line(&Mode::PlayerVsPlayer { left: 2, right: 7 }),
            "Score: 2 | 7"
        );
        assert_eq!(score_line(&Mode::WallPractice { score: 4 }), "Score: 4");
    }

    #[test]
    fn test_side_labels_use_mode_specific_right_label() {
        let config = Config::default();
        let (_, right) = side_labels(&Mode::player_vs_bot(), &config);
        assert_eq!(right, "Computer");
        let (_, right) = side_labels(&Mode::player_vs_player(), &config);
        assert_eq!(right, config.right_name);
    }

    #[test]
    fn test_draw_emits_score_and_ball() {
        let config = Config::default();
        let state = GameState::new(Mode::player_vs_player(), &config, 1);

        let mut buf = Vec::new();
        draw(&mut buf, &state).unwrap();
        let frame = String::from_utf8_lossy(&buf);

        assert!(frame.contains("Score: 0 | 0"));
        assert!(frame.contains('O'));
    }
}
