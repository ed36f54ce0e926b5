//! Application state: game, leaderboard, and the game-over name prompt.
//!
//! The app layers a small screen machine over the core phase machine. While
//! the name prompt is open, keys edit the name buffer instead of mapping to
//! game actions; everywhere else they go through the input map.

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::GameState;
use crate::input::{handle_key_event, should_quit};
use crate::leaderboard::Leaderboard;
use crate::types::Phase;

/// Longest player name accepted by the prompt.
pub const MAX_NAME_LEN: usize = 16;

/// What the terminal is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The playfield, with idle/pause/game-over overlays from the phase.
    Game,
    /// Name entry after a finished game.
    EnterName { buf: String },
}

pub struct App {
    pub game: GameState,
    pub leaderboard: Leaderboard,
    screen: Screen,
    /// Set when the current game over has already opened (or dismissed)
    /// the prompt, so it is not reopened every frame.
    prompted: bool,
}

impl App {
    pub fn new(game: GameState, leaderboard: Leaderboard) -> Self {
        Self {
            game,
            leaderboard,
            screen: Screen::Game,
            prompted: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Advance the game clock and open the name prompt on a fresh game over.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.game.tick(elapsed_ms);
        self.sync_screen();
    }

    /// Handle one key event. Returns false when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match &mut self.screen {
            Screen::EnterName { buf } => {
                match key.code {
                    KeyCode::Enter => {
                        let name = std::mem::take(buf);
                        let score = self.game.score();
                        self.leaderboard.record(&name, score);
                        self.game.reset();
                        self.screen = Screen::Game;
                    }
                    KeyCode::Esc => {
                        // Skip submission; the game stays on the game-over
                        // overlay until reset.
                        self.screen = Screen::Game;
                    }
                    KeyCode::Backspace => {
                        buf.pop();
                    }
                    KeyCode::Char(c) => {
                        if buf.len() < MAX_NAME_LEN && !c.is_control() {
                            buf.push(c);
                        }
                    }
                    _ => {}
                }
                true
            }
            Screen::Game => {
                if should_quit(key) {
                    return false;
                }
                if let Some(action) = handle_key_event(key) {
                    self.game.apply_action(action);
                    self.sync_screen();
                }
                true
            }
        }
    }

    fn sync_screen(&mut self) {
        if self.game.phase() == Phase::GameOver {
            if !self.prompted {
                self.prompted = true;
                self.screen = Screen::EnterName { buf: String::new() };
            }
        } else {
            self.prompted = false;
        }
    }
}
