//! Grid geometry
//!
//! Fixed-capacity storage plus the coordinate helpers shared by the
//! engine and the map loader.

use super::{Cell, Direction};

/// Maximum number of rows in a map
pub const MAX_ROWS: usize = 10;

/// Maximum number of columns in a map
pub const MAX_COLS: usize = 10;

/// Stored cell values, row-major
pub type Grid = [[Cell; MAX_COLS]; MAX_ROWS];

/// Per-cell "ever seen" flags
pub type DiscoveryMask = [[bool; MAX_COLS]; MAX_ROWS];

/// Wire-level board snapshot (cell codes)
pub type Board = [[i32; MAX_COLS]; MAX_ROWS];

/// A grid of padding cells
pub const EMPTY_GRID: Grid = [[Cell::Padding; MAX_COLS]; MAX_ROWS];

/// An all-zero board, as used by responses without a snapshot
pub const EMPTY_BOARD: Board = [[0; MAX_COLS]; MAX_ROWS];

/// A (row, column) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance: max of the row and column differences
    pub fn chebyshev(self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// The neighbouring position in `direction`, if it lies within a
    /// `rows` x `cols` extent
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Position { row, col })
    }
}

/// Convert stored cells to their wire codes
pub fn to_board(grid: &Grid) -> Board {
    let mut board = EMPTY_BOARD;
    for (board_row, grid_row) in board.iter_mut().zip(grid.iter()) {
        for (code, cell) in board_row.iter_mut().zip(grid_row.iter()) {
            *code = cell.code();
        }
    }
    board
}
