//! Game State Engine
//!
//! Owns the grid, the player position, the discovery mask and the
//! lifecycle flags for one session.
//!
//! ## Invariants
//! - While the game is active exactly one stored cell is `Player`
//! - Start and exit coordinates never change after a load
//! - The discovery mask only grows, except on a full reload
//! - Once over, nothing mutates the state until the next load

use crate::map::MazeMap;

use super::grid::{to_board, Board, DiscoveryMask, Grid, Position, EMPTY_GRID, MAX_COLS, MAX_ROWS};
use super::{Cell, Direction};

/// Cells within this Chebyshev distance of the player are always visible
pub const VISIBILITY_RADIUS: usize = 1;

/// Lifecycle of a session's game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// No Start received yet
    Unstarted,
    /// Map loaded, exit not reached
    Active,
    /// Exit reached; only Reset and Exit do anything
    Over,
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Destination out of bounds, a wall, or padding; state untouched
    Blocked,
    /// Player moved to an ordinary cell
    Moved,
    /// Player moved onto the exit; the game is now over
    Escaped,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        !matches!(self, MoveOutcome::Blocked)
    }
}

/// Per-session game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    discovered: DiscoveryMask,
    rows: usize,
    cols: usize,
    player: Position,
    start: Position,
    exit: Position,
    initialized: bool,
    over: bool,
}

impl GameState {
    /// Create an empty, unstarted state
    pub fn new() -> Self {
        Self {
            grid: EMPTY_GRID,
            discovered: [[false; MAX_COLS]; MAX_ROWS],
            rows: 0,
            cols: 0,
            player: Position::default(),
            start: Position::default(),
            exit: Position::default(),
            initialized: false,
            over: false,
        }
    }

    /// Create a state with `map` already loaded
    pub fn from_map(map: &MazeMap) -> Self {
        let mut state = Self::new();
        state.load(map);
        state
    }

    /// Load a fresh copy of `map`, discarding all progress
    ///
    /// Used by both Start and Reset.
    pub fn load(&mut self, map: &MazeMap) {
        self.grid = *map.grid();
        self.rows = map.rows();
        self.cols = map.cols();
        self.start = map.start();
        self.exit = map.exit();
        self.player = map.start();
        self.reset_discovery();
        self.over = false;
        self.initialized = true;
        tracing::info!("starting new game");
    }

    /// Clear the discovery mask, then mark the cells around the player
    pub fn reset_discovery(&mut self) {
        self.discovered = [[false; MAX_COLS]; MAX_ROWS];
        self.discover_around_player();
    }

    fn discover_around_player(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.player.chebyshev(Position::new(row, col)) <= VISIBILITY_RADIUS {
                    self.discovered[row][col] = true;
                }
            }
        }
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// The cell the player would enter moving in `direction`, if legal
    fn destination(&self, direction: Direction) -> Option<Position> {
        let target = self.player.step(direction, self.rows, self.cols)?;
        self.cell(target).is_walkable().then_some(target)
    }

    /// Whether a move in `direction` would succeed right now
    pub fn can_move(&self, direction: Direction) -> bool {
        self.is_active() && self.destination(direction).is_some()
    }

    /// Try to move the player one cell
    ///
    /// On success the vacated cell becomes `Start` or `Path`, the
    /// destination becomes `Player`, and the discovery mask grows around
    /// the new position. Entering the exit ends the game.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.is_active() {
            return MoveOutcome::Blocked;
        }
        let Some(target) = self.destination(direction) else {
            tracing::trace!(?direction, player = ?self.player, "Move blocked");
            return MoveOutcome::Blocked;
        };

        let entered = self.cell(target);
        let vacated = if self.player == self.start {
            Cell::Start
        } else {
            Cell::Path
        };
        self.set_cell(self.player, vacated);

        self.player = target;
        self.discover_around_player();
        self.set_cell(target, Cell::Player);

        if entered == Cell::Exit {
            self.over = true;
            tracing::info!(player = ?target, "Player reached the exit");
            MoveOutcome::Escaped
        } else {
            MoveOutcome::Moved
        }
    }

    /// Legal directions from the current position, in wire order
    pub fn possible_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.can_move(*d))
            .collect()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Board as the client is allowed to see it
    ///
    /// Cells farther than the visibility radius that were never
    /// discovered are replaced by fog. Padding is never fogged.
    pub fn snapshot_for_client(&self) -> Board {
        let mut board = to_board(&self.grid);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let here = Position::new(row, col);
                if self.player.chebyshev(here) > VISIBILITY_RADIUS
                    && !self.discovered[row][col]
                    && self.grid[row][col] != Cell::Padding
                {
                    board[row][col] = Cell::Fog.code();
                }
            }
        }
        board
    }

    /// Unfogged board with the exit cell shown as `Exit`
    pub fn revealed_board(&self) -> Board {
        let mut board = to_board(&self.grid);
        board[self.exit.row][self.exit.col] = Cell::Exit.code();
        board
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn lifecycle(&self) -> Lifecycle {
        match (self.initialized, self.over) {
            (false, _) => Lifecycle::Unstarted,
            (true, false) => Lifecycle::Active,
            (true, true) => Lifecycle::Over,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    fn is_active(&self) -> bool {
        self.initialized && !self.over
    }

    /// Stored cell value; padding outside the fixed capacity
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid
            .get(pos.row)
            .and_then(|r| r.get(pos.col))
            .copied()
            .unwrap_or(Cell::Padding)
    }

    fn set_cell(&mut self, pos: Position, cell: Cell) {
        self.grid[pos.row][pos.col] = cell;
    }

    pub fn is_discovered(&self, pos: Position) -> bool {
        self.discovered
            .get(pos.row)
            .and_then(|r| r.get(pos.col))
            .copied()
            .unwrap_or(false)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
