//! Game state and core simulation types
//!
//! One session = one `GameState`. Everything the engine mutates lives in
//! this aggregate and is passed explicitly into `tick`; there is no shared
//! or global entity state.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::Config;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Active gameplay
    Playing,
    /// A score counter reached the session's limit
    Over,
}

/// The playfield rectangle. Row 0 and row `height - 1` are walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Field {
    /// Cell the ball is re-centered on after a goal
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

/// A paddle: fixed column, movable top row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub height: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32, height: i32) -> Self {
        Self { x, y, height }
    }

    /// Move one cell up unless already against the top wall
    pub fn move_up(&mut self) {
        if self.y > 1 {
            self.y -= 1;
        }
    }

    /// Move one cell down unless the bottom edge would enter the bottom wall
    pub fn move_down(&mut self, field_height: i32) {
        if self.y + self.height < field_height - 1 {
            self.y += 1;
        }
    }
}

/// The ball: cell position plus unit velocity components.
///
/// `dx` and `dy` are only ever -1 or 1; there is no stationary ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Ball {
    pub fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, dx, dy }
    }

    /// Advance one cell. Unconditional; called exactly once per tick before
    /// any collision check.
    pub fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Re-center after a goal. Inverts `dx` so the serve travels toward the
    /// scorer's opponent; `dy` is left as-is.
    pub fn reset(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.dx = -self.dx;
    }
}

/// Play mode, fixed for the session. Each variant carries only the scoring
/// data it needs: the pairwise modes a counter per side, wall practice a
/// single counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Both paddles human-controlled
    PlayerVsPlayer { left: u32, right: u32 },
    /// Right paddle driven by the reactive tracking policy
    PlayerVsBot { left: u32, right: u32 },
    /// Solo rally; boundaries reflect, one counter advances
    WallPractice { score: u32 },
}

impl Mode {
    pub fn player_vs_player() -> Self {
        Mode::PlayerVsPlayer { left: 0, right: 0 }
    }

    pub fn player_vs_bot() -> Self {
        Mode::PlayerVsBot { left: 0, right: 0 }
    }

    pub fn wall_practice() -> Self {
        Mode::WallPractice { score: 0 }
    }

    /// Whether a session in this mode appends a record to the match history
    /// when it ends. Wall practice is a drill, not a match, and stays out.
    pub fn emits_result(&self) -> bool {
        match self {
            Mode::PlayerVsPlayer { .. } | Mode::PlayerVsBot { .. } => true,
            Mode::WallPractice { .. } => false,
        }
    }

    /// Termination condition: any counter at or past the limit
    pub fn limit_reached(&self, max_score: u32) -> bool {
        match *self {
            Mode::PlayerVsPlayer { left, right } | Mode::PlayerVsBot { left, right } => {
                left >= max_score || right >= max_score
            }
            Mode::WallPractice { score } => score >= max_score,
        }
    }
}

/// Complete session state, owned by the game loop for the session's lifetime
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub mode: Mode,
    pub max_score: u32,
    pub phase: Phase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seed for the opening serve; same seed, same session
    pub seed: u64,
}

impl GameState {
    /// Set up a fresh session: paddles centered on their columns, ball at
    /// field center serving rightward with a seeded vertical direction.
    pub fn new(mode: Mode, config: &Config, seed: u64) -> Self {
        let field = Field {
            width: config.field_width,
            height: config.field_height,
        };
        let paddle_y = field.height / 2 - config.paddle_height / 2;
        let (cx, cy) = field.center();

        let mut rng = Pcg32::seed_from_u64(seed);
        let dy = if rng.random_bool(0.5) { 1 } else { -1 };

        Self {
            field,
            left: Paddle::new(1, paddle_y, config.paddle_height),
            right: Paddle::new(field.width - 2, paddle_y, config.paddle_height),
            ball: Ball::new(cx, cy, 1, dy),
            mode,
            max_score: config.max_score,
            phase: Phase::Playing,
            time_ticks: 0,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_top_clamp_idempotent() {
        let mut paddle = Paddle::new(1, 2, 4);
        paddle.move_up();
        assert_eq!(paddle.y, 1);
        // Already at the clamp; further calls leave y unchanged
        paddle.move_up();
        paddle.move_up();
        assert_eq!(paddle.y, 1);
    }

    #[test]
    fn test_paddle_bottom_clamp() {
        let field_height = 10;
        let mut paddle = Paddle::new(1, 4, 4);
        paddle.move_down(field_height);
        assert_eq!(paddle.y, 5);
        // y + height == field_height - 1: clamped
        paddle.move_down(field_height);
        assert_eq!(paddle.y, 5);
    }

    #[test]
    fn test_ball_step() {
        let mut ball = Ball::new(5, 5, 1, -1);
        ball.step();
        assert_eq!((ball.x, ball.y), (6, 4));
    }

    #[test]
    fn test_ball_reset_round_trip() {
        let mut ball = Ball::new(39, 3, 1, 1);
        ball.reset(20, 10);
        assert_eq!((ball.x, ball.y), (20, 10));
        assert_eq!(ball.dx, -1);
        assert_eq!(ball.dy, 1);
    }

    #[test]
    fn test_mode_emits_result() {
        assert!(Mode::player_vs_player().emits_result());
        assert!(Mode::player_vs_bot().emits_result());
        assert!(!Mode::wall_practice().emits_result());
    }

    #[test]
    fn test_mode_limit_reached() {
        let mode = Mode::PlayerVsPlayer { left: 2, right: 3 };
        assert!(mode.limit_reached(3));
        assert!(!mode.limit_reached(4));

        let wall = Mode::WallPractice { score: 5 };
        assert!(wall.limit_reached(5));
        assert!(!wall.limit_reached(6));
    }

    #[test]
    fn test_new_session_layout() {
        let config = Config::default();
        let state = GameState::new(Mode::player_vs_player(), &config, 7);

        assert_eq!(state.left.x, 1);
        assert_eq!(state.right.x, config.field_width - 2);
        assert_eq!(
            (state.ball.x, state.ball.y),
            (config.field_width / 2, config.field_height / 2)
        );
        assert_eq!(state.ball.dx, 1);
        assert!(state.ball.dy == 1 || state.ball.dy == -1);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let config = Config::default();
        let a = GameState::new(Mode::player_vs_bot(), &config, 42);
        let b = GameState::new(Mode::player_vs_bot(), &config, 42);
        assert_eq!(a.ball, b.ball);
    }
}
