use crate::pieces::{Piece, Shape};
use crate::types::{PieceKind, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color_id: u8,
}

impl ActiveSnapshot {
    /// Whether the piece covers board cell (x, y).
    pub fn covers(&self, x: i32, y: i32) -> bool {
        let (col, row) = (x - self.x, y - self.y);
        col >= 0 && row >= 0 && self.shape.get(row as usize, col as usize)
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
            color_id: value.color_id(),
        }
    }
}

/// Read-only view of an engine for presentation adapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major occupancy, `height * width` cells.
    pub board: Vec<bool>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub level: u32,
    pub interval_ms: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Locked occupancy at (x, y); `false` outside the board.
    pub fn locked(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.board[y * self.width + x]
    }

    /// Colour id of the active piece if it covers (x, y).
    pub fn active_color_at(&self, x: usize, y: usize) -> Option<u8> {
        self.active
            .filter(|a| a.covers(x as i32, y as i32))
            .map(|a| a.color_id)
    }
}
