//! Collision detection between a piece placement and the board.

use crate::board::Board;
use crate::pieces::Piece;

/// Whether `piece` cannot occupy its current placement on `board`.
///
/// A placement collides when any occupied cell lands left of column 0, at or
/// right of `width`, at or below `height`, or on an occupied board cell.
/// Cells above the top edge (`y < 0`) are free.
pub fn collides(board: &Board, piece: &Piece) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;
    piece.cells().iter().any(|&(x, y)| {
        if x < 0 || x >= width || y >= height {
            return true;
        }
        y >= 0 && board.is_occupied(x, y)
    })
}
