//! Board occupancy and row clearing through the public API.

use blockfall::core::{Board, ConfigError};

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..board.width() as i32 {
        board.set(x, y, true);
    }
}

#[test]
fn test_default_board_is_empty_ten_by_twenty() {
    let board = Board::default();
    assert_eq!((board.width(), board.height()), (10, 20));
    assert_eq!(board.occupied_count(), 0);
    assert!(board.rows().all(|row| row.iter().all(|&c| !c)));
}

#[test]
fn test_out_of_range_queries_read_empty() {
    let mut board = Board::default();
    fill_row(&mut board, 19);
    assert!(!board.is_occupied(-1, 19));
    assert!(!board.is_occupied(10, 19));
    assert!(!board.is_occupied(0, 20));
    assert!(!board.is_occupied(0, -3));
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_disjoint_full_rows_clear_together() {
    let mut board = Board::default();
    fill_row(&mut board, 19);
    board.set(0, 18, true);
    fill_row(&mut board, 17);
    board.set(9, 16, true);

    assert_eq!(board.clear_completed_rows(), 2);

    // Partial rows dropped by the number of full rows below them.
    assert!(board.is_occupied(0, 19));
    assert!(board.is_occupied(9, 18));
    assert_eq!(board.occupied_count(), 2);
    assert!(board.row(0).unwrap().iter().all(|&c| !c));
}

#[test]
fn test_locking_then_clearing_preserves_width() {
    let mut board = Board::new(4, 3).unwrap();
    board.lock([(0, 2), (1, 2), (2, 2)]);
    assert!(!board.is_row_full(2));

    board.lock([(3, 2), (3, 1)]);
    assert!(board.is_row_full(2));
    assert_eq!(board.clear_completed_rows(), 1);
    assert_eq!(
        board.to_rows(),
        vec![
            vec![false; 4],
            vec![false; 4],
            vec![false, false, false, true],
        ]
    );
}

#[test]
fn test_clear_on_board_without_full_rows() {
    let mut board = Board::default();
    board.set(3, 10, true);
    assert_eq!(board.clear_completed_rows(), 0);
    assert!(board.is_occupied(3, 10));
}

#[test]
fn test_invalid_geometry_fails_fast() {
    assert_eq!(Board::new(0, 20).unwrap_err(), ConfigError::ZeroWidth);
    assert_eq!(Board::new(10, 0).unwrap_err(), ConfigError::ZeroHeight);
}
