//! Shape module - piece geometry and rotation
//!
//! A shape is a small rectangular boolean grid with an explicit width and
//! height over a fixed 4x4 backing store. Storing the dimensions explicitly
//! avoids any ragged-row ambiguity: every row of a shape has the same length
//! by construction.
//!
//! Rotation is the plain 90-degree clockwise transform with no wall kicks;
//! callers verify the rotated shape against the board before committing it.

use crate::types::PieceKind;

/// Maximum extent of a shape in either dimension.
pub const SHAPE_MAX: usize = 4;

/// Rectangular occupancy grid for one piece orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    /// Build a shape from row slices. Rows must be non-empty, uniform in
    /// length, and fit the 4x4 backing store.
    pub const fn from_rows<const H: usize, const W: usize>(rows: [[bool; W]; H]) -> Self {
        assert!(H >= 1 && H <= SHAPE_MAX);
        assert!(W >= 1 && W <= SHAPE_MAX);

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        let mut y = 0;
        while y < H {
            let mut x = 0;
            while x < W {
                cells[y][x] = rows[y][x];
                x += 1;
            }
            y += 1;
        }

        Self {
            width: W as u8,
            height: H as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (x, y) within the shape grid is occupied.
    /// Out-of-range coordinates read as empty.
    pub fn at(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y as usize][x as usize]
    }

    /// Iterate over occupied cell offsets as (dx, dy).
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.at(x, y))
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }

    /// Produce the 90-degree clockwise rotation of this shape.
    ///
    /// The new width equals the old height and vice versa. Pure transform,
    /// no bounds checking against any board.
    pub fn rotated(&self) -> Shape {
        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                // Row y from the bottom becomes column y from the left.
                cells[x][self.height as usize - 1 - y] = self.cells[y][x];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

const T: bool = true;
const F: bool = false;

/// Spawn-orientation shapes for the 7-piece catalog.
pub const CATALOG: [Shape; 7] = [
    // I
    Shape::from_rows([[T, T, T, T]]),
    // O
    Shape::from_rows([[T, T], [T, T]]),
    // T
    Shape::from_rows([[F, T, F], [T, T, T]]),
    // L
    Shape::from_rows([[T, F, F], [T, T, T]]),
    // J
    Shape::from_rows([[F, F, T], [T, T, T]]),
    // S
    Shape::from_rows([[F, T, T], [T, T, F]]),
    // Z
    Shape::from_rows([[T, T, F], [F, T, T]]),
];

/// Get the spawn shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    CATALOG[kind_index(kind)]
}

fn kind_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::L => 3,
        PieceKind::J => 4,
        PieceKind::S => 5,
        PieceKind::Z => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shapes_have_occupied_cells_at_all_rotations() {
        for kind in PieceKind::ALL {
            let mut shape = spawn_shape(kind);
            for _ in 0..4 {
                assert!(shape.cell_count() >= 1, "{kind:?} has an empty rotation");
                assert_eq!(shape.cell_count(), 4, "{kind:?} is not a tetromino");
                shape = shape.rotated();
            }
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let i = spawn_shape(PieceKind::I);
        assert_eq!((i.width(), i.height()), (4, 1));

        let rotated = i.rotated();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
        assert!(rotated.at(0, 0) && rotated.at(0, 3));
    }

    #[test]
    fn four_rotations_return_original() {
        for kind in PieceKind::ALL {
            let original = spawn_shape(kind);
            let back = original.rotated().rotated().rotated().rotated();
            assert_eq!(original, back, "{kind:?} did not survive four rotations");
        }
    }

    #[test]
    fn t_piece_rotates_clockwise() {
        // .X.      X.
        // XXX  ->  XX
        //          X.
        let t = spawn_shape(PieceKind::T);
        let r = t.rotated();
        assert_eq!((r.width(), r.height()), (2, 3));
        assert!(r.at(0, 0) && r.at(0, 1) && r.at(1, 1) && r.at(0, 2));
        assert!(!r.at(1, 0) && !r.at(1, 2));
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let o = spawn_shape(PieceKind::O);
        assert!(!o.at(2, 0));
        assert!(!o.at(0, 2));
    }
}
