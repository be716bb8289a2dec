//! Game Module
//!
//! The per-session maze engine.
//!
//! ## Responsibilities
//! - Hold the grid, player position and discovery mask
//! - Decide whether a move is legal and apply it
//! - Produce fog-of-war snapshots for the client
//! - Track the Unstarted / Active / Over lifecycle
//!
//! ## Cell Codes
//! ```text
//! -1 padding   0 wall   1 path   2 start
//!  3 exit      4 fog    5 player
//! ```

mod cell;
mod direction;
mod grid;
mod state;

pub use cell::Cell;
pub use direction::Direction;
pub use grid::{
    to_board, Board, DiscoveryMask, Grid, Position, EMPTY_BOARD, EMPTY_GRID, MAX_COLS, MAX_ROWS,
};
pub use state::{GameState, Lifecycle, MoveOutcome, VISIBILITY_RADIUS};
