//! Frog Run entry point
//!
//! Sets up the terminal, then drives the simulation at a fixed ~60 Hz:
//! drain input events, run any due ticks, render the resulting snapshot.
//! Inputs take effect at the next tick boundary; the render pass only ever
//! sees a fully updated state.

use std::io::{self, Write, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use std::{env, process, thread};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, terminal,
};

use frog_run::consts::*;
use frog_run::input::{self, Command};
use frog_run::render::{self, PixelBuf, scene};
use frog_run::sim::{GameState, TickInput, tick};
use frog_run::tuning::Tuning;

/// Restores the terminal even on panic or early return
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run seed: `FROG_RUN_SEED` for reproducible runs, otherwise time-and-pid
fn pick_seed() -> u64 {
    if let Ok(value) = env::var("FROG_RUN_SEED") {
        match value.parse() {
            Ok(seed) => return seed,
            Err(_) => log::warn!("Ignoring unparseable FROG_RUN_SEED {value:?}"),
        }
    }
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (process::id() as u128)) as u64
}

fn main() -> io::Result<()> {
    env_logger::init();

    let tuning_path = env::args().nth(1).map(PathBuf::from);
    let tuning = Tuning::load_or_default(tuning_path.as_deref());
    let seed = pick_seed();
    log::info!("Frog Run starting (seed {seed})");

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;
    let _guard = TerminalGuard;

    let (mut cols, mut rows) = terminal::size()?;
    let mut buf = PixelBuf::new(cols as usize, rows as usize * 2);
    let mut state = GameState::new(seed, tuning);
    let mut pending = TickInput::default();

    let tick_dur = Duration::from_secs_f32(TICK_DT);
    let mut last = Instant::now();
    let mut accumulator = Duration::ZERO;

    loop {
        let frame_start = Instant::now();

        // Input: commands flip flags that the next tick consumes
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match input::map_key(key.code, state.phase) {
                        Some(Command::Quit) => {
                            log::info!("Quit (best score {})", state.best_score);
                            return Ok(());
                        }
                        Some(Command::Start) => pending.start = true,
                        Some(Command::Jump) => pending.jump = true,
                        Some(Command::Restart) => pending.restart = true,
                        None => {}
                    }
                }
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                    buf.resize(cols as usize, rows as usize * 2);
                }
                _ => {}
            }
        }

        // Fixed-step update with a catch-up cap
        let now = Instant::now();
        accumulator += now - last;
        last = now;
        let mut steps = 0;
        while accumulator >= tick_dur && steps < MAX_CATCHUP_TICKS {
            tick(&mut state, &pending);
            pending = TickInput::default(); // one-shot commands
            accumulator -= tick_dur;
            steps += 1;
        }
        if steps == MAX_CATCHUP_TICKS {
            // Too far behind (e.g. suspended terminal); drop the backlog
            accumulator = Duration::ZERO;
        }

        // Render the post-tick snapshot
        scene::draw(&state, &mut buf);
        buf.present(&mut out)?;
        render::draw_hud(&mut out, &state, cols, rows)?;
        out.flush()?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < tick_dur {
            thread::sleep(tick_dur - elapsed);
        }
    }
}
