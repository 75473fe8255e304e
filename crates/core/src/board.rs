//! Board module - manages the game grid
//!
//! The board is a `width` x `height` occupancy grid. Cells carry no piece
//! identity: a cell is either empty or occupied.
//! Uses a flat vector (row-major, `y * width + x`) for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::config::ConfigError;

/// The game board - flat boolean occupancy storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Fails fast on a zero dimension.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        let (width, height) = (width as usize, height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Build a board from explicit rows (top to bottom).
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != width {
                return Err(ConfigError::RaggedRows {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend_from_slice(cols);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if an in-range cell is occupied.
    ///
    /// Out-of-range positions report `false`; bounds are the collision
    /// detector's concern, not the board's.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Mark every given board coordinate occupied.
    ///
    /// Coordinates outside the grid are skipped.
    pub fn lock<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        for (x, y) in cells {
            self.set(x, y, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].iter().all(|&c| c)
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row.
    fn remove_row(&mut self, y: usize) {
        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(false);
    }

    /// Clear all complete rows and return how many were removed.
    ///
    /// Rows are scanned bottom to top. After a removal the rows above have
    /// shifted into the current index, so the same index is examined again.
    pub fn clear_completed_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Borrow one row (top = 0).
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Convert to 2D rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }
}

impl Default for Board {
    /// Standard 10x20 board.
    fn default() -> Self {
        Self {
            width: crate::types::BOARD_WIDTH as usize,
            height: crate::types::BOARD_HEIGHT as usize,
            cells: vec![false; (crate::types::BOARD_WIDTH * crate::types::BOARD_HEIGHT) as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_board_rejects_zero_dimensions() {
        assert_eq!(Board::new(0, 20), Err(ConfigError::ZeroWidth));
        assert_eq!(Board::new(10, 0), Err(ConfigError::ZeroHeight));
        assert_eq!(Board::from_rows(&[]), Err(ConfigError::ZeroWidth));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![false; 3], vec![false; 2]];
        assert_eq!(
            Board::from_rows(&rows),
            Err(ConfigError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::from_rows(&[
            vec![true, false],
            vec![false, true],
            vec![true, true],
        ])
        .unwrap();

        board.remove_row(2);

        assert_eq!(
            board.to_rows(),
            vec![vec![false, false], vec![true, false], vec![false, true]]
        );
    }

    #[test]
    fn test_clear_rows_rechecks_shifted_row() {
        // Two adjacent complete rows at the bottom with a partial row above.
        let mut board = Board::from_rows(&[
            vec![true, false, false],
            vec![true, true, true],
            vec![true, true, true],
        ])
        .unwrap();

        assert_eq!(board.clear_completed_rows(), 2);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![false, false, false],
                vec![false, false, false],
                vec![true, false, false],
            ]
        );
    }

    #[test]
    fn test_lock_ignores_out_of_range() {
        let mut board = Board::new(4, 4).unwrap();
        board.lock([(0, 0), (-1, 0), (4, 1), (1, -2), (3, 3)]);
        assert_eq!(board.occupied_count(), 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(3, 3));
    }
}
