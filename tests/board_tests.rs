//! Line-clear compaction on random grids.

use blockfall::game::{Board, Cell, PieceType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_board(rng: &mut StdRng, width: usize, height: usize) -> Board {
    let mut board = Board::new(width, height);
    for y in 0..height as i32 {
        // Roughly a third of the rows come out full
        let solid = rng.gen_bool(0.35);
        for x in 0..width as i32 {
            if solid || rng.gen_bool(0.5) {
                board.set(x, y, Cell::Filled(PieceType::from_index(rng.gen_range(0..7))));
            }
        }
    }
    board
}

/// Each column read top to bottom, skipping full rows.
fn surviving_columns(board: &Board) -> Vec<Vec<Cell>> {
    (0..board.width())
        .map(|x| {
            (0..board.height())
                .filter(|&y| !board.is_row_full(y))
                .map(|y| board.row(y)[x])
                .collect()
        })
        .collect()
}

#[test]
fn test_clear_lines_leaves_no_full_rows() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let mut board = random_board(&mut rng, 6, 10);
        let full_before = (0..10).filter(|&y| board.is_row_full(y)).count();
        assert_eq!(board.clear_lines(), full_before);
        assert!((0..10).all(|y| !board.is_row_full(y)));
        assert_eq!((board.width(), board.height()), (6, 10));
    }
}

#[test]
fn test_clear_lines_only_moves_cells_down() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..200 {
        let mut board = random_board(&mut rng, 6, 10);
        let expected = surviving_columns(&board);
        let cleared = board.clear_lines();

        for (x, column) in expected.iter().enumerate() {
            let after: Vec<Cell> = (cleared..board.height()).map(|y| board.row(y)[x]).collect();
            assert_eq!(&after, column, "column {} changed", x);
            assert!((0..cleared).all(|y| board.row(y)[x].is_empty()));
        }
    }
}

#[test]
fn test_clear_lines_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut board = random_board(&mut rng, 8, 12);
    board.clear_lines();
    let once = board.clone();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, once);
}
