//! tty-pong entry point
//!
//! Owns the terminal, the menu loop and the per-session tick loop. The
//! simulation itself lives in `tty_pong::sim`; this file only wires it to
//! the clock, the keyboard and the screen.

use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Instant;

use tty_pong::consts;
use tty_pong::scores::{self, MatchRecord, ScoreLog};
use tty_pong::settings::Config;
use tty_pong::sim::{self, GameState, Mode, Phase, TickInput};
use tty_pong::ui::{Action, MenuChoice, Screen, input, menu, render};

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("tty-pong starting");

    let config_path = Path::new(consts::CONFIG_FILE);
    let scores_path = Path::new(consts::SCORES_FILE);
    let mut config = Config::load(config_path);

    let mut screen = Screen::enter()?;
    loop {
        match menu::main_menu(screen.out())? {
            MenuChoice::Play(mode) => run_session(screen.out(), &config, mode, scores_path)?,
            MenuChoice::Results => menu::results_screen(screen.out(), scores_path)?,
            MenuChoice::Settings => menu::settings_menu(screen.out(), &mut config, config_path)?,
            MenuChoice::Exit => break,
        }
    }

    log::info!("tty-pong exiting");
    Ok(())
}

/// One complete game: fixed-cadence tick loop until the score limit or the
/// quit key, then the end screen and, for the pairwise modes, a history
/// record.
fn run_session(
    out: &mut impl Write,
    config: &Config,
    mode: Mode,
    scores_path: &Path,
) -> io::Result<()> {
    let seed = scores::now_ms();
    let mut state = GameState::new(mode, config, seed);
    let interval = config.tick_interval();
    log::info!("Session start: {:?}, seed {}", state.mode, state.seed);

    let mut quit = false;
    while state.phase == Phase::Playing {
        let tick_start = Instant::now();

        // At most one action is sampled per tick; an empty poll is normal
        let mut tick_input = TickInput::default();
        match input::poll_action(interval)? {
            Some(Action::Quit) => {
                quit = true;
                break;
            }
            Some(action) => tick_input = action.to_tick_input(),
            None => {}
        }
        // A key can arrive before the budget runs out; hold the cadence
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }

        sim::tick(&mut state, &tick_input);

        if state.phase == Phase::Playing {
            render::draw(out, &state)?;
        }
    }

    log::info!(
        "Session end: {:?}{}",
        state.mode,
        if quit { " (quit)" } else { "" }
    );

    if state.mode.emits_result() {
        if let Mode::PlayerVsPlayer { left, right } | Mode::PlayerVsBot { left, right } = state.mode
        {
            let (left_name, right_name) = render::side_labels(&state.mode, config);
            let record = MatchRecord {
                left_name,
                left_score: left,
                right_name,
                right_score: right,
                played_at_ms: scores::now_ms(),
            };
            if let Err(err) = ScoreLog::append(scores_path, record) {
                log::warn!("Could not append score record: {err}");
            }
        }
    }

    if !quit {
        render::draw_game_over(out, &state, config)?;
        input::wait_any_key()?;
    }
    Ok(())
}
