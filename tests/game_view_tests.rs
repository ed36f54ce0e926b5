//! GameView rendering tests (pure, no terminal I/O)

use crossterm::event::{KeyCode, KeyEvent};

use blockfall::app::App;
use blockfall::core::GameState;
use blockfall::leaderboard::Leaderboard;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::GameAction;

const VIEW: Viewport = Viewport {
    width: 80,
    height: 26,
};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

#[test]
fn idle_screen_shows_start_hint_and_panel() {
    let app = App::new(GameState::new(1), Leaderboard::in_memory());
    let fb = GameView::default().render(&app, VIEW);
    let text = screen_text(&fb);

    assert!(text.contains("PRESS ENTER TO START"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("LINES"));
    assert!(text.contains("TOP SCORES"));
    assert!(text.contains("none yet"));
}

#[test]
fn running_screen_draws_active_piece() {
    let mut app = App::new(GameState::new(1), Leaderboard::in_memory());
    app.game.apply_action(GameAction::Start);

    let fb = GameView::default().render(&app, VIEW);
    let text = screen_text(&fb);

    assert!(!text.contains("PRESS ENTER TO START"));
    // Four occupied cells at 2 columns each.
    assert_eq!(text.matches('█').count(), 8);
}

#[test]
fn paused_overlay_is_shown() {
    let mut app = App::new(GameState::new(1), Leaderboard::in_memory());
    app.game.apply_action(GameAction::Start);
    app.game.apply_action(GameAction::Pause);

    let fb = GameView::default().render(&app, VIEW);
    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn leaderboard_entries_are_listed_ranked() {
    let mut leaderboard = Leaderboard::in_memory();
    leaderboard.record("alice", 1200);
    leaderboard.record("bob", 800);
    let mut app = App::new(GameState::new(1), leaderboard);

    let fb = GameView::default().render(&app, VIEW);
    let text = screen_text(&fb);

    assert!(text.contains("1. alice"));
    assert!(text.contains("2. bob"));

    // Still renders after starting a game.
    app.game.apply_action(GameAction::Start);
    let fb = GameView::default().render(&app, VIEW);
    assert!(screen_text(&fb).contains("1200"));
}

#[test]
fn name_prompt_renders_buffer() {
    let mut game = GameState::new(1);
    game.apply_action(GameAction::Start);
    // Top out quickly.
    while game.phase() == blockfall::types::Phase::Running {
        game.apply_action(GameAction::HardDrop);
    }

    let mut app = App::new(game, Leaderboard::in_memory());
    app.update(0);
    for c in "zoe".chars() {
        app.handle_key(KeyEvent::from(KeyCode::Char(c)));
    }

    let fb = GameView::default().render(&app, VIEW);
    let text = screen_text(&fb);
    assert!(text.contains("FINAL SCORE"));
    assert!(text.contains("NAME: zoe_"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let app = App::new(GameState::new(1), Leaderboard::in_memory());
    for (w, h) in [(0, 0), (1, 1), (10, 5), (25, 21)] {
        let _ = GameView::default().render(&app, Viewport::new(w, h));
    }
}
