//! Board collision and line-clear tests

use blockfall::core::rng::SimpleRng;
use blockfall::core::{spawn_shape, Board, Shape};
use blockfall::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

fn board_rows(board: &Board) -> Vec<Vec<Cell>> {
    board
        .cells()
        .chunks(W)
        .map(|row| row.to_vec())
        .collect()
}

/// Reference line-clear: scan bottom to top, remove each full row, insert an
/// empty row at the top, and re-examine the same row index after a removal.
/// This is the original game's algorithm, kept here to prove the single-pass
/// compaction in `Board` is equivalent.
fn clear_lines_rescan(rows: &mut Vec<Vec<Cell>>) -> usize {
    let mut cleared = 0;
    let mut y = rows.len() as i32 - 1;
    while y >= 0 {
        if rows[y as usize].iter().all(|c| c.is_some()) {
            rows.remove(y as usize);
            rows.insert(0, vec![None; W]);
            cleared += 1;
        } else {
            y -= 1;
        }
    }
    cleared
}

#[test]
fn collides_exactly_on_bounds_or_overlap() {
    let mut board = Board::new();
    board.set(5, 10, Some(PieceKind::T));

    for kind in PieceKind::ALL {
        let mut shape = spawn_shape(kind);
        for _ in 0..4 {
            for y in -4..(H as i8 + 4) {
                for x in -4..(W as i8 + 4) {
                    let expected = shape.occupied().any(|(dx, dy)| {
                        let px = x + dx;
                        let py = y + dy;
                        px < 0
                            || px >= W as i8
                            || py >= H as i8
                            || (py >= 0 && board.get(px, py) == Some(Some(PieceKind::T)))
                    });
                    assert_eq!(
                        board.collides(x, y, &shape),
                        expected,
                        "{kind:?} at ({x},{y})"
                    );
                }
            }
            shape = shape.rotated();
        }
    }
}

#[test]
fn merge_then_collide_on_same_cells() {
    let mut board = Board::new();
    let t = spawn_shape(PieceKind::T);

    assert!(!board.collides(4, 17, &t));
    board.merge(4, 17, &t, PieceKind::T);
    assert!(board.collides(4, 17, &t));

    // A piece directly above now rests on the merged cells.
    assert!(board.collides(4, 16, &t));
}

#[test]
fn four_simultaneous_full_rows_clear_together() {
    let mut board = Board::new();
    for y in (H - 4)..H {
        for x in 0..W {
            board.set(x as i8, y as i8, Some(PieceKind::I));
        }
    }
    // A survivor above the cleared block.
    board.set(2, (H - 5) as i8, Some(PieceKind::J));

    let cleared = board.clear_full_rows();

    assert_eq!(cleared, 4);
    assert_eq!(board.cells().len(), W * H);
    // Survivor moved to the bottom, top rows are empty.
    assert_eq!(board.get(2, (H - 1) as i8), Some(Some(PieceKind::J)));
    for y in 0..4 {
        assert!(board.cells()[y * W..(y + 1) * W].iter().all(Cell::is_none));
    }
}

#[test]
fn compaction_matches_rescan_reference_on_patterns() {
    // Hand-picked row patterns: adjacent full rows, separated full rows,
    // full rows at the very top and very bottom.
    let full_row_sets: [&[usize]; 6] = [
        &[19],
        &[18, 19],
        &[15, 17, 19],
        &[0],
        &[0, 19],
        &[16, 17, 18, 19],
    ];

    for full_rows in full_row_sets {
        let mut board = Board::new();
        for &y in full_rows {
            for x in 0..W {
                board.set(x as i8, y as i8, Some(PieceKind::S));
            }
        }
        // Scatter a few partial cells elsewhere.
        for y in [2usize, 9, 13] {
            if !full_rows.contains(&y) {
                board.set((y % W) as i8, y as i8, Some(PieceKind::L));
            }
        }

        let mut reference = board_rows(&board);
        let expected_cleared = clear_lines_rescan(&mut reference);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared, expected_cleared, "rows {full_rows:?}");
        assert_eq!(board_rows(&board), reference, "rows {full_rows:?}");
    }
}

#[test]
fn compaction_matches_rescan_reference_on_random_boards() {
    let mut rng = SimpleRng::new(0xB10C);

    for round in 0..200 {
        let mut board = Board::new();
        for y in 0..H {
            // Bias toward dense rows so full rows actually occur.
            let make_full = rng.next_range(4) == 0;
            for x in 0..W {
                let filled = make_full || rng.next_range(3) > 0;
                if filled {
                    board.set(x as i8, y as i8, Some(PieceKind::Z));
                }
            }
        }

        let mut reference = board_rows(&board);
        let expected_cleared = clear_lines_rescan(&mut reference);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared, expected_cleared, "round {round}");
        assert_eq!(board_rows(&board), reference, "round {round}");
    }
}

#[test]
fn shape_rows_are_uniform_width() {
    // Every cell outside the declared width/height reads as empty, so no
    // rotation can produce a ragged row.
    for kind in PieceKind::ALL {
        let mut shape: Shape = spawn_shape(kind);
        for _ in 0..4 {
            for y in 0..shape.height() {
                for x in shape.width()..4 {
                    assert!(!shape.at(x, y));
                }
            }
            shape = shape.rotated();
        }
    }
}
