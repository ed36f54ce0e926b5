//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is flushed to a crossterm backend
//! with diffed redraws. `GameView` is pure and testable; only
//! `TerminalRenderer` touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
