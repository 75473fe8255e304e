//! Pieces module - polyomino shape matrices and rotation
//!
//! A shape is a small boolean matrix (at most 4x4) anchored at its top-left
//! corner. Rotation turns the matrix 90° clockwise: an R×C matrix becomes
//! C×R with `result[c][R-1-r] = shape[r][c]`. The anchor does not move, so
//! pieces without a square bounding box drift visually when rotated.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_DIM};

/// Offset of one occupied cell inside a shape: (row, col)
pub type CellOffset = (u8, u8);

/// Occupied cells of a shape, stack-allocated
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Board coordinates of a piece's occupied cells: (x, y)
pub type BoardCells = ArrayVec<(i32, i32), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Spawn matrices, one string per row, `#` marks an occupied cell.
fn spawn_rows(kind: PieceKind) -> &'static [&'static str] {
    match kind {
        PieceKind::I => &["####"],
        PieceKind::O => &["##", "##"],
        PieceKind::S => &[".##", "##."],
        PieceKind::Z => &["##.", ".##"],
        PieceKind::T => &["###", ".#."],
        PieceKind::L => &["###", "#.."],
        PieceKind::J => &["###", "..#"],
    }
}

/// Rectangular boolean matrix with a fixed 4x4 capacity.
///
/// Cells outside `rows` x `cols` are always `false`, so derived equality
/// compares only the meaningful region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Spawn orientation of a tetromino kind.
    pub fn for_kind(kind: PieceKind) -> Self {
        let rows = spawn_rows(kind);
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut cols = 0;
        for (r, line) in rows.iter().enumerate() {
            cols = cols.max(line.len());
            for (c, ch) in line.bytes().enumerate() {
                bits[r][c] = ch == b'#';
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        }
    }

    /// Build a shape from explicit rows.
    ///
    /// Returns `None` when the matrix is empty, ragged or larger than 4x4.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0
            || cols > MAX_SHAPE_DIM
            || rows.len() > MAX_SHAPE_DIM
            || rows.iter().any(|row| row.len() != cols)
        {
            return None;
        }
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            bits[r][..cols].copy_from_slice(row);
        }
        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Cell at (row, col); `false` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Rotate 90° clockwise.
    pub fn rotated_cw(&self) -> Self {
        let (r_len, c_len) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..r_len {
            for c in 0..c_len {
                bits[c][r_len - 1 - r] = self.bits[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Occupied cells as (row, col) offsets, in row-major order.
    pub fn occupied(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.bits[r][c] {
                    out.push((r as u8, c as u8));
                }
            }
        }
        out
    }

    /// Iterate the rows of the matrix.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.bits[..self.rows()]
            .iter()
            .map(move |row| &row[..self.cols()])
    }
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's top-left corner
    pub x: i32,
    /// Row of the shape's top-left corner
    pub y: i32,
}

impl Piece {
    /// Create a piece at the spawn position for a board of `board_width` columns.
    ///
    /// Spawn column is `floor(width / 2) - 1`, row 0.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        Self {
            kind,
            shape: Shape::for_kind(kind),
            x: (board_width / 2) as i32 - 1,
            y: 0,
        }
    }

    /// Candidate moved by (dx, dy); shape unchanged.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate with the shape rotated clockwise; origin unchanged.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Board coordinates (x, y) of every occupied cell.
    pub fn cells(&self) -> BoardCells {
        self.shape
            .occupied()
            .into_iter()
            .map(|(r, c)| (self.x + c as i32, self.y + r as i32))
            .collect()
    }

    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }
}
