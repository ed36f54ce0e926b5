//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 12;
pub const BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_MS_PER_LEVEL: u32 = 100;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Scoring constants
pub const LINE_SCORE_BASE: u32 = 100;
pub const HARD_DROP_SCORE_PER_ROW: u32 = 2;
pub const LINES_PER_LEVEL: u32 = 10;

/// Leaderboard capacity
pub const LEADERBOARD_CAP: usize = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Convert to a single display letter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Game lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Start,
    Reset,
}
