//! Board tests through the facade crate

use blockfall::core::{clear_lines, collides, line_clear_score, Board, Shape};
use blockfall::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..BOARD_WIDTH as i8 {
        assert!(board.set(x, y, Some(color)));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.cells().len(), 200);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_out_of_bounds_reads_and_writes() {
    let mut board = Board::new();

    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 20), (i8::MIN, i8::MAX)] {
        assert_eq!(board.get(x, y), None);
        assert!(board.is_out_of_bounds(x, y));
        assert!(!board.set(x, y, Some(Color::Red)));
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_set_and_clear_cell() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(board.is_empty_at(5, 10));
}

#[test]
fn test_single_full_row_clears_and_scores() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Color::Cyan);
    board.set(3, 18, Some(Color::Red));

    let result = clear_lines(&mut board);
    assert_eq!(result.lines(), 1);
    assert_eq!(result.score_delta, 10);

    // The lone cell above sinks by one row.
    assert_eq!(board.get(3, 19), Some(Some(Color::Red)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_non_adjacent_full_rows_keep_survivor_order() {
    let mut board = Board::new();
    fill_row(&mut board, 5, Color::Blue);
    fill_row(&mut board, 10, Color::Blue);
    board.set(0, 4, Some(Color::Green));
    board.set(1, 7, Some(Color::Orange));
    board.set(2, 15, Some(Color::Yellow));

    let result = clear_lines(&mut board);
    assert_eq!(result.rows.as_slice(), &[5, 10]);
    assert_eq!(result.score_delta, 20);

    // Above both cleared rows: down by 2. Between them: down by 1. Below: stays.
    assert_eq!(board.get(0, 6), Some(Some(Color::Green)));
    assert_eq!(board.get(1, 8), Some(Some(Color::Orange)));
    assert_eq!(board.get(2, 15), Some(Some(Color::Yellow)));
    assert_eq!(board.filled_count(), 3);

    // The two rows freed at the top are empty.
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
    assert!(board.row(1).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_lines_without_full_rows_changes_nothing() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(Color::Red));
    }
    let before = board.clone();

    let result = clear_lines(&mut board);
    assert_eq!(result.lines(), 0);
    assert_eq!(result.score_delta, 0);
    assert_eq!(board, before);
}

#[test]
fn test_whole_board_full_clears_everything() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        fill_row(&mut board, y, Color::Purple);
    }

    let result = clear_lines(&mut board);
    assert_eq!(result.lines(), 20);
    assert_eq!(result.score_delta, line_clear_score(20));
    assert_eq!(board, Board::new());
}

#[test]
fn test_collision_against_walls_floor_and_cells() {
    let mut board = Board::new();
    let square = Shape::from_rows(&[&[1, 1], &[1, 1]]).unwrap();

    assert!(!collides(&square, &board, 0, 0));
    assert!(!collides(&square, &board, 8, 18));
    assert!(collides(&square, &board, -1, 0));
    assert!(collides(&square, &board, 9, 0));
    assert!(collides(&square, &board, 0, 19));
    assert!(collides(&square, &board, 0, -1));

    board.set(1, 1, Some(Color::Red));
    assert!(collides(&square, &board, 0, 0));
    assert!(!collides(&square, &board, 2, 0));
}

#[test]
fn test_empty_matrix_cells_never_collide() {
    let mut board = Board::new();
    // T's top corners are empty; filled board cells there are fine.
    let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    board.set(3, 0, Some(Color::Red));
    board.set(5, 0, Some(Color::Red));
    assert!(!collides(&t, &board, 3, 0));
}
