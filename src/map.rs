//! Map Loader
//!
//! Reads a whitespace-delimited numeric grid from text.
//!
//! ## File Format
//! ```text
//! 0 0 0 0
//! 0 2 1 0      2 = player start
//! 0 0 3 0      3 = exit
//! ```
//! - At most 10 rows and 10 columns
//! - Every row must have the same number of tokens
//! - Only 0 (wall), 1 (path), 2 (start) and 3 (exit) may appear
//! - Blank lines are ignored
//!
//! Any violation is a startup error; a map that loads once is copied
//! verbatim into every new game.

use std::fs;
use std::path::Path;

use crate::error::{MazeError, Result};
use crate::game::{Cell, Grid, Position, EMPTY_GRID, MAX_COLS, MAX_ROWS};

/// A validated map, ready to seed a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeMap {
    grid: Grid,
    rows: usize,
    cols: usize,
    start: Position,
    exit: Position,
}

impl MazeMap {
    /// Load and validate a map file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Parse and validate map text
    pub fn parse(text: &str) -> Result<Self> {
        let mut grid = EMPTY_GRID;
        let mut rows = 0;
        let mut cols: Option<usize> = None;
        let mut start = None;
        let mut exit = None;

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let line_no = rows + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            match cols {
                None => cols = Some(tokens.len()),
                Some(expected) if expected != tokens.len() => {
                    return Err(MazeError::MapInconsistentColumns {
                        row: line_no,
                        expected,
                        found: tokens.len(),
                    });
                }
                Some(_) => {}
            }

            if rows >= MAX_ROWS || tokens.len() > MAX_COLS {
                return Err(MazeError::MapTooLarge {
                    rows: rows + 1,
                    cols: tokens.len(),
                    max_rows: MAX_ROWS,
                    max_cols: MAX_COLS,
                });
            }

            for (col, token) in tokens.iter().enumerate() {
                let value: i32 = token.parse().map_err(|_| MazeError::MapInvalidToken {
                    row: line_no,
                    token: token.to_string(),
                })?;

                let here = Position::new(rows, col);
                let cell = match value {
                    0 => Cell::Wall,
                    1 => Cell::Path,
                    2 => {
                        if start.replace(here).is_some() {
                            return Err(MazeError::MapDuplicateMarker("start"));
                        }
                        // The player begins on the start cell
                        Cell::Player
                    }
                    3 => {
                        if exit.replace(here).is_some() {
                            return Err(MazeError::MapDuplicateMarker("exit"));
                        }
                        Cell::Exit
                    }
                    _ => return Err(MazeError::MapInvalidCell { row: line_no, value }),
                };
                grid[rows][col] = cell;
            }

            rows += 1;
        }

        let cols = match cols {
            Some(c) if c > 0 => c,
            _ => return Err(MazeError::MapEmpty),
        };
        let start = start.ok_or(MazeError::MapMissingMarker("start"))?;
        let exit = exit.ok_or(MazeError::MapMissingMarker("exit"))?;

        tracing::debug!(rows, cols, ?start, ?exit, "Map parsed");

        Ok(Self {
            grid,
            rows,
            cols,
            start,
            exit,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Initial cell values (padding outside the map extent)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }
}
