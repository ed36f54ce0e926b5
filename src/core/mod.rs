//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, persistence, or I/O.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use rng::PieceSource;
pub use shape::{spawn_shape, Shape};
