//! blockfall: a terminal falling-block puzzle game.
//!
//! The `core` module is the host-agnostic game-state machine; `leaderboard`
//! persists the local top-10 list; `term` and `input` are the crossterm
//! front end; `app` wires them together.

pub mod app;
pub mod core;
pub mod input;
pub mod leaderboard;
pub mod term;
pub mod types;
