//! Per-tick simulation advance
//!
//! `tick` is the whole engine: sampled input, entity advance, collision
//! resolution and mode rules run here in a fixed order. The mode rule arms
//! own paddle-collision handling outright, so each qualifying collision
//! inverts `dx` exactly once per tick; there is no shared post-check that
//! could fire a second time.

use super::collision::{self, Edge};
use super::state::{Ball, GameState, Mode, Paddle, Phase};

/// Direction of a paddle move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleDir {
    Up,
    Down,
}

/// Input sampled for a single tick. The loop polls at most one key per
/// tick, so at most one field is set; both `None` is the common case.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: Option<PaddleDir>,
    pub right: Option<PaddleDir>,
}

/// Reactive tracking policy for the automated opponent: chase the ball's
/// row, one cell per tick, no look-ahead.
fn drive_bot(ball: &Ball, paddle: &mut Paddle, field_height: i32) {
    if ball.y < paddle.y {
        paddle.move_up();
    } else if ball.y > paddle.y + paddle.height {
        paddle.move_down(field_height);
    }
}

/// Advance the session by one tick.
///
/// Order is fixed: paddle commands, ball step, wall bounce, mode rules,
/// termination check. Ticks after the phase turns `Over` are no-ops.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == Phase::Over {
        return;
    }
    state.time_ticks += 1;

    // Sampled human commands. The right paddle only takes key input in
    // PvP; in the other modes it is bot-driven or out of play.
    if let Some(dir) = input.left {
        match dir {
            PaddleDir::Up => state.left.move_up(),
            PaddleDir::Down => state.left.move_down(state.field.height),
        }
    }
    if matches!(state.mode, Mode::PlayerVsPlayer { .. }) {
        if let Some(dir) = input.right {
            match dir {
                PaddleDir::Up => state.right.move_up(),
                PaddleDir::Down => state.right.move_down(state.field.height),
            }
        }
    }
    state.ball.step();
    collision::bounce_walls(&mut state.ball, state.field.height);

    // The bot reacts to the ball's position this tick, before the paddle
    // collision test sees either of them
    if matches!(state.mode, Mode::PlayerVsBot { .. }) {
        drive_bot(&state.ball, &mut state.right, state.field.height);
    }

    let (cx, cy) = state.field.center();
    match &mut state.mode {
        Mode::PlayerVsPlayer { left, right } | Mode::PlayerVsBot { left, right } => {
            if collision::paddle_hit(&state.ball, &state.left)
                || collision::paddle_hit(&state.ball, &state.right)
            {
                state.ball.dx = -state.ball.dx;
            }
            match collision::edge_reached(&state.ball, state.field.width) {
                Some(Edge::Left) => {
                    *right += 1;
                    state.ball.reset(cx, cy);
                }
                Some(Edge::Right) => {
                    *left += 1;
                    state.ball.reset(cx, cy);
                }
                None => {}
            }
        }
        Mode::WallPractice { score } => {
            // Only the left paddle is in play; the right column is a wall
            if collision::paddle_hit(&state.ball, &state.left) {
                state.ball.dx = -state.ball.dx;
            }
            match collision::edge_reached(&state.ball, state.field.width) {
                // Left boundary keeps the rally alive
                Some(Edge::Left) => state.ball.dx = -state.ball.dx,
                // Right boundary scores; reset's own inversion turns the
                // serve back toward the player
                Some(Edge::Right) => {
                    *score += 1;
                    state.ball.reset(cx, cy);
                }
                None => {}
            }
        }
    }

    if state.mode.limit_reached(state.max_score) {
        state.phase = Phase::Over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Config;
    use proptest::prelude::*;

    fn config_40x20() -> Config {
        Config {
            field_width: 40,
            field_height: 20,
            ..Config::default()
        }
    }

    /// Park both paddles where the ball won't reach them
    fn clear_paddles(state: &mut GameState) {
        state.left.y = 1;
        state.right.y = 1;
        state.ball.y = 10;
    }

    #[test]
    fn test_goal_on_right_edge_scores_left() {
        let mut state = GameState::new(Mode::player_vs_player(), &config_40x20(), 0);
        clear_paddles(&mut state);
        state.ball = Ball::new(39, 10, 1, 1);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.mode, Mode::PlayerVsPlayer { left: 1, right: 0 });
        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        // Entered the reset with dx = 1; serve flips toward the loser
        assert_eq!(state.ball.dx, -1);
    }

    #[test]
    fn test_goal_on_left_edge_scores_right() {
        let mut state = GameState::new(Mode::player_vs_player(), &config_40x20(), 0);
        clear_paddles(&mut state);
        state.ball = Ball::new(1, 10, -1, 1);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.mode, Mode::PlayerVsPlayer { left: 0, right: 1 });
        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        assert_eq!(state.ball.dx, 1);
    }

    #[test]
    fn test_paddle_reflection_no_score() {
        let mut state = GameState::new(Mode::player_vs_player(), &config_40x20(), 0);
        state.left = Paddle::new(1, 5, 4);
        state.right.y = 14;
        // One step left of the paddle column, heading in
        state.ball = Ball::new(2, 7, -1, -1);

        tick(&mut state, &TickInput::default());

        assert_eq!((state.ball.x, state.ball.y), (1, 6));
        assert_eq!(state.ball.dx, 1);
        assert_eq!(state.mode, Mode::PlayerVsPlayer { left: 0, right: 0 });
    }

    #[test]
    fn test_wall_mode_left_edge_reflects_without_loss() {
        let mut state = GameState::new(Mode::wall_practice(), &config_40x20(), 0);
        state.left.y = 14;
        state.ball = Ball::new(1, 6, -1, 1);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.x, 0);
        assert_eq!(state.ball.dx, 1);
        assert_eq!(state.mode, Mode::WallPractice { score: 0 });
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_wall_mode_right_edge_scores_and_serves_back() {
        let mut state = GameState::new(Mode::wall_practice(), &config_40x20(), 0);
        state.left.y = 14;
        state.ball = Ball::new(38, 10, 1, 1);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.mode, Mode::WallPractice { score: 1 });
        assert_eq!((state.ball.x, state.ball.y), (20, 10));
        // Single inversion, from the reset alone: back toward the player
        assert_eq!(state.ball.dx, -1);
    }

    #[test]
    fn test_wall_mode_paddle_hit_inverts_exactly_once() {
        let mut state = GameState::new(Mode::wall_practice(), &config_40x20(), 0);
        state.left = Paddle::new(1, 5, 4);
        state.ball = Ball::new(2, 6, -1, 1);

        tick(&mut state, &TickInput::default());

        // A double inversion would leave dx = -1 and the ball sailing on
        // through the paddle toward the edge
        assert_eq!((state.ball.x, state.ball.y), (1, 7));
        assert_eq!(state.ball.dx, 1);
        assert_eq!(state.mode, Mode::WallPractice { score: 0 });
    }

    #[test]
    fn test_bot_tracks_ball_one_cell() {
        let mut state = GameState::new(Mode::player_vs_bot(), &config_40x20(), 0);
        state.right = Paddle::new(38, 10, 4);
        state.ball = Ball::new(10, 6, 1, -1);

        tick(&mut state, &TickInput::default());

        // Ball row 5 is above the paddle: exactly one move up
        assert_eq!(state.right.y, 9);
    }

    #[test]
    fn test_bot_holds_when_ball_in_span() {
        let mut state = GameState::new(Mode::player_vs_bot(), &config_40x20(), 0);
        state.right = Paddle::new(38, 8, 4);
        state.ball = Ball::new(10, 10, 1, 1);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.right.y, 8);
    }

    #[test]
    fn test_right_input_ignored_outside_pvp() {
        let mut state = GameState::new(Mode::wall_practice(), &config_40x20(), 0);
        state.right = Paddle::new(38, 8, 4);
        state.ball = Ball::new(10, 10, 1, 1);

        let input = TickInput {
            left: None,
            right: Some(PaddleDir::Up),
        };
        tick(&mut state, &input);

        assert_eq!(state.right.y, 8);
    }

    #[test]
    fn test_left_input_moves_paddle() {
        let mut state = GameState::new(Mode::player_vs_player(), &config_40x20(), 0);
        state.left = Paddle::new(1, 8, 4);
        state.ball = Ball::new(20, 10, 1, 1);

        let input = TickInput {
            left: Some(PaddleDir::Up),
            right: None,
        };
        tick(&mut state, &input);
        assert_eq!(state.left.y, 7);

        let input = TickInput {
            left: Some(PaddleDir::Down),
            right: None,
        };
        tick(&mut state, &input);
        tick(&mut state, &input);
        assert_eq!(state.left.y, 9);
    }

    #[test]
    fn test_termination_at_limit_freezes_session() {
        let mut config = config_40x20();
        config.max_score = 3;
        let mut state = GameState::new(Mode::player_vs_player(), &config, 0);
        clear_paddles(&mut state);
        state.mode = Mode::PlayerVsPlayer { left: 2, right: 0 };
        state.ball = Ball::new(39, 10, 1, 1);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, Mode::PlayerVsPlayer { left: 3, right: 0 });
        assert_eq!(state.phase, Phase::Over);

        // Further ticks are no-ops: no extra goals, no movement
        let frozen = state.clone();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, frozen.time_ticks);
        assert_eq!(state.ball, frozen.ball);
        assert_eq!(state.mode, frozen.mode);
    }

    #[test]
    fn test_vertical_bounce_applies_in_all_modes() {
        for mode in [
            Mode::player_vs_player(),
            Mode::player_vs_bot(),
            Mode::wall_practice(),
        ] {
            let mut state = GameState::new(mode, &config_40x20(), 0);
            state.left.y = 10;
            state.right.y = 10;
            state.ball = Ball::new(20, 2, 1, -1);

            tick(&mut state, &TickInput::default());

            assert_eq!(state.ball.y, 1);
            assert_eq!(state.ball.dy, 1);
        }
    }

    proptest! {
        /// Velocity components stay on the unit diagonal and paddles stay
        /// inside the walls, whatever the input stream does.
        #[test]
        fn prop_tick_invariants(seed in any::<u64>(), keys in prop::collection::vec(0u8..5, 1..300)) {
            let config = config_40x20();
            let mut state = GameState::new(Mode::player_vs_bot(), &config, seed);

            for key in keys {
                let input = match key {
                    0 => TickInput { left: Some(PaddleDir::Up), right: None },
                    1 => TickInput { left: Some(PaddleDir::Down), right: None },
                    2 => TickInput { left: None, right: Some(PaddleDir::Up) },
                    3 => TickInput { left: None, right: Some(PaddleDir::Down) },
                    _ => TickInput::default(),
                };
                tick(&mut state, &input);

                prop_assert!(state.ball.dx == 1 || state.ball.dx == -1);
                prop_assert!(state.ball.dy == 1 || state.ball.dy == -1);
                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.y >= 1);
                    prop_assert!(paddle.y + paddle.height <= state.field.height - 1);
                }
            }
        }

        /// Wall-practice sessions never move the pairwise counters because
        /// there are none: the single counter only ever grows.
        #[test]
        fn prop_wall_counter_monotonic(seed in any::<u64>(), n in 1usize..400) {
            let config = config_40x20();
            let mut state = GameState::new(Mode::wall_practice(), &config, seed);
            let mut last = 0;

            for _ in 0..n {
                tick(&mut state, &TickInput::default());
                let Mode::WallPractice { score } = state.mode else {
                    panic!("mode changed mid-session");
                };
                prop_assert!(score >= last);
                last = score;
            }
        }
    }
}
