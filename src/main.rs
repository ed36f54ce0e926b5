//! Terminal blockfall runner.
//!
//! Single-threaded cooperative loop: render, poll input with a timeout until
//! the next frame, then advance the game clock by the measured elapsed time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::app::App;
use blockfall::core::GameState;
use blockfall::leaderboard::Leaderboard;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let game = GameState::new(seed);
    let leaderboard = Leaderboard::open_default();
    let mut app = App::new(game, leaderboard);

    let view = GameView::default();
    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&app, Viewport::new(w, h));
        term.draw(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !app.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Advance by measured wall time since the last frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame_duration {
            last_frame = Instant::now();
            app.update(elapsed.as_millis() as u32);
        }
    }
}
