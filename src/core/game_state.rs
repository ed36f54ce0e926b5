//! Game state module - manages the complete game state
//!
//! This module ties together board, shapes, RNG, and scoring. It owns the
//! lifecycle phase machine (Idle -> Running -> Paused <-> Running ->
//! GameOver -> Idle) and the gravity clock.
//!
//! The state is host-agnostic: `tick(elapsed_ms)` takes measured elapsed
//! time and can be driven by a terminal loop, a timer, or a test harness.

use crate::core::scoring::{drop_interval_ms, hard_drop_score, level_for_lines, line_clear_score};
use crate::core::shape::{spawn_shape, Shape};
use crate::core::{Board, PieceSource};
use crate::types::{GameAction, Phase, PieceKind, BOARD_WIDTH};

/// The falling piece under player control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn position: horizontally centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    source: PieceSource,
    score: u32,
    lines: u32,
    level: u32,
    /// Gravity accumulator; gravity fires when it exceeds the drop interval.
    drop_timer_ms: u32,
    phase: Phase,
}

impl GameState {
    /// Create a new idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            source: PieceSource::new(seed),
            score: 0,
            lines: 0,
            level: 1,
            drop_timer_ms: 0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Start the game and spawn the first piece. No-op unless idle.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Running;
        self.drop_timer_ms = 0;
        self.spawn_piece();
    }

    /// Toggle between running and paused. No-op in other phases.
    ///
    /// The gravity accumulator keeps its pre-pause progress; `tick` discards
    /// elapsed time while paused, so resuming never sees a spurious jump.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Running,
            Phase::Idle | Phase::GameOver => {}
        }
    }

    /// Discard board, piece, and counters; return to idle.
    ///
    /// The RNG continues from its current state so a reset does not replay
    /// the previous game's piece sequence.
    pub fn reset(&mut self) {
        *self = Self::new(self.source.seed());
    }

    /// Spawn the next piece from the random source.
    ///
    /// If the spawn position already overlaps board contents the game is
    /// over; the board is left untouched and no piece becomes active.
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.source.draw());

        if self.board.collides(piece.x, piece.y, &piece.shape) {
            self.phase = Phase::GameOver;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to shift the active piece. Returns true if it moved.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.board.collides(active.x + dx, active.y + dy, &active.shape) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Try to rotate the active piece 90 degrees clockwise.
    ///
    /// The rotated shape must fit at the unchanged position; otherwise the
    /// rotation is discarded and the piece keeps its prior shape. No wall
    /// kicks are attempted.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated();
        if self.board.collides(active.x, active.y, &rotated) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        true
    }

    /// One gravity step: move the piece down a row, or lock it in when
    /// blocked. Returns true if the piece moved down.
    pub(crate) fn step_down(&mut self) -> bool {
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Drop the active piece straight to the bottom and lock it.
    ///
    /// Awards 2 points per row descended, credited before the merge and any
    /// line-clear scoring. Returns the distance dropped.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        let Some(active) = self.active else {
            return 0;
        };

        let mut distance: u32 = 0;
        while !self
            .board
            .collides(active.x, active.y + distance as i8 + 1, &active.shape)
        {
            distance += 1;
        }

        if distance > 0 {
            self.active = Some(ActivePiece {
                y: active.y + distance as i8,
                ..active
            });
        }

        self.score += hard_drop_score(distance);
        self.lock_piece();
        distance
    }

    /// Merge the active piece into the board, clear lines, update
    /// score/level, and spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .merge(active.x, active.y, &active.shape, active.kind);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            // The level in effect before this clear scales the bonus.
            self.score += line_clear_score(cleared, self.level);
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        self.spawn_piece();
    }

    /// Advance the gravity clock by measured elapsed time.
    ///
    /// Gravity fires once the accumulated time exceeds the drop interval,
    /// then the accumulator resets. Returns true if gravity fired. No-op
    /// outside the running phase.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms > self.drop_interval_ms() {
            self.drop_timer_ms = 0;
            self.step_down();
            return true;
        }

        false
    }

    /// Apply a game action. Returns true if it changed the state.
    ///
    /// Piece commands are ignored unless the game is running; lifecycle
    /// commands are gated by the phase machine.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                if self.phase != Phase::Idle {
                    return false;
                }
                self.start();
                true
            }
            GameAction::Pause => {
                let before = self.phase;
                self.toggle_pause();
                self.phase != before
            }
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
            | GameAction::HardDrop | GameAction::Rotate
                if self.phase != Phase::Running =>
            {
                false
            }
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                self.step_down();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.try_rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
