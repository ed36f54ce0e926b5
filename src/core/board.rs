//! Board module - manages the game grid
//!
//! The board is a 12x20 grid where each cell can be empty or filled with a
//! piece kind. Uses a flat array for cache locality.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19
//! (top to bottom). Piece cells above the top row are legal while falling in
//! and are never checked against board contents.

use crate::core::shape::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether a shape placed with its origin at (x, y) collides.
    ///
    /// A collision is any occupied shape cell that falls outside the
    /// horizontal bounds, at or below the bottom, or on an already-filled
    /// cell. Cells above the top row (negative board y) are only checked
    /// against the horizontal bounds, never against contents.
    pub fn collides(&self, x: i8, y: i8, shape: &Shape) -> bool {
        shape.occupied().any(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;

            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }

            py >= 0 && self.cells[(py as usize) * (BOARD_WIDTH as usize) + (px as usize)].is_some()
        })
    }

    /// Write a piece's kind into every occupied cell of a shape placed at
    /// (x, y). Cells above the top row are dropped. Callers are expected to
    /// have validated the placement with [`Board::collides`] first.
    pub fn merge(&mut self, x: i8, y: i8, shape: &Shape, kind: PieceKind) {
        for (dx, dy) in shape.occupied() {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above down and inserting
    /// empty rows at the top. Returns the number of rows cleared.
    ///
    /// Single bottom-up compaction pass with a write pointer; board
    /// dimensions are unchanged and the order of surviving rows is preserved.
    /// Handles any number of simultaneously full rows, adjacent or not.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Blank the rows that opened up at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|y| {
                let start = y * width;
                self.cells[start..start + width].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
