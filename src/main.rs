//! Terminal blockfall runner.
//!
//! Reads [`Config`] from the environment, then runs the game loop: draw the
//! current snapshot, wait for keys until the next gravity tick is due, apply
//! them, and deliver due ticks. Rendering goes through the framebuffer-based
//! renderer, not a widget toolkit.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState, Ticker};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::LockEvent;

fn main() -> Result<()> {
    let config = Config::from_env();
    for warning in &config.warnings {
        eprintln!("[blockfall] warning: {}", warning);
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut lock_log = match &config.log_path {
        Some(path) => Some(LockLog::open(path)?),
        None => None,
    };

    let mut game = GameState::new(seed);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config, lock_log.as_mut());

    // Restore the terminal even when the loop failed.
    let restored = term.exit();
    result?;
    restored?;

    println!(
        "[blockfall] seed={} score={} lines={} pieces={} status={}",
        game.seed(),
        game.score(),
        game.lines(),
        game.piece_id(),
        game.status().as_str()
    );
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    config: &Config,
    mut lock_log: Option<&mut LockLog>,
) -> Result<()> {
    let view = GameView::default();
    let mut ticker = Ticker::new(config.tick_ms);
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = if game.is_playing() {
            Duration::from_millis(ticker.remaining_ms() as u64)
        } else {
            // Nothing moves any more; just wait for the quit key.
            Duration::from_millis(config.tick_ms as u64)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply_command(command);
                        record(game, &mut lock_log)?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;

        if !game.is_playing() {
            ticker.reset();
            continue;
        }
        for _ in 0..ticker.advance(elapsed) {
            if !game.is_playing() {
                break;
            }
            game.tick();
            record(game, &mut lock_log)?;
        }
    }
}

fn record(game: &mut GameState, lock_log: &mut Option<&mut LockLog>) -> Result<()> {
    let Some(event) = game.take_last_event() else {
        return Ok(());
    };
    if let Some(log) = lock_log.as_deref_mut() {
        log.write(game.score(), &event)?;
    }
    Ok(())
}

/// Append-only lock event log, one line per locked piece.
struct LockLog {
    path: String,
    file: File,
}

impl LockLog {
    fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open lock log {}", path))?;
        Ok(Self {
            path: path.to_string(),
            file,
        })
    }

    fn write(&mut self, score: u32, event: &LockEvent) -> Result<()> {
        writeln!(
            self.file,
            "piece={} kind={} lines_cleared={} score_delta={} score={} game_over={}",
            event.piece_id,
            event.kind.as_str(),
            event.lines_cleared,
            event.score_delta,
            score,
            event.game_over
        )
        .with_context(|| format!("write lock log {}", self.path))
    }
}
