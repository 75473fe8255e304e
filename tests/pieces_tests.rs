//! Shape table and clockwise rotation for every piece kind.

use blockfall::core::{Piece, Shape};
use blockfall::types::PieceKind;

fn picture(shape: &Shape) -> Vec<String> {
    shape
        .iter_rows()
        .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
        .collect()
}

#[test]
fn test_spawn_table() {
    let expected: [(PieceKind, &[&str]); 7] = [
        (PieceKind::I, &["####"]),
        (PieceKind::O, &["##", "##"]),
        (PieceKind::S, &[".##", "##."]),
        (PieceKind::Z, &["##.", ".##"]),
        (PieceKind::T, &["###", ".#."]),
        (PieceKind::L, &["###", "#.."]),
        (PieceKind::J, &["###", "..#"]),
    ];
    for (kind, rows) in expected {
        assert_eq!(picture(&Shape::for_kind(kind)), rows, "{kind:?}");
    }
}

#[test]
fn test_one_clockwise_turn() {
    let expected: [(PieceKind, &[&str]); 7] = [
        (PieceKind::I, &["#", "#", "#", "#"]),
        (PieceKind::O, &["##", "##"]),
        (PieceKind::S, &["#.", "##", ".#"]),
        (PieceKind::Z, &[".#", "##", "#."]),
        (PieceKind::T, &[".#", "##", ".#"]),
        (PieceKind::L, &["##", ".#", ".#"]),
        (PieceKind::J, &[".#", ".#", "##"]),
    ];
    for (kind, rows) in expected {
        assert_eq!(picture(&Shape::for_kind(kind).rotated_cw()), rows, "{kind:?}");
    }
}

#[test]
fn test_rotation_keeps_origin() {
    let piece = Piece::spawn(PieceKind::L, 10);
    let turned = piece.rotated();
    assert_eq!((turned.x, turned.y), (piece.x, piece.y));
    assert_eq!(turned.kind, PieceKind::L);
    assert_eq!(turned.cells().len(), 4);
}

#[test]
fn test_spawn_column_follows_board_width() {
    assert_eq!(Piece::spawn(PieceKind::O, 10).x, 4);
    assert_eq!(Piece::spawn(PieceKind::O, 7).x, 2);
    assert_eq!(Piece::spawn(PieceKind::O, 1).x, -1);
}
