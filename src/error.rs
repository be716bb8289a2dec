//! Error types for fogmaze
//!
//! Provides a unified error type for all operations.
//!
//! Protocol-level failures (illegal moves, unknown commands, commands
//! before Start or after the game is over) are NOT errors here: the
//! session turns them into ordinary response messages.

use thiserror::Error;

/// Result type alias using MazeError
pub type Result<T> = std::result::Result<T, MazeError>;

/// Unified error type for fogmaze operations
#[derive(Debug, Error)]
pub enum MazeError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Map Errors (fatal at startup)
    // -------------------------------------------------------------------------
    #[error("Inconsistent number of columns in line {row}: expected {expected}, found {found}")]
    MapInconsistentColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Map too large: {rows}x{cols} exceeds {max_rows}x{max_cols}")]
    MapTooLarge {
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },

    #[error("Invalid token {token:?} in line {row}")]
    MapInvalidToken { row: usize, token: String },

    #[error("Invalid cell value {value} in line {row}")]
    MapInvalidCell { row: usize, value: i32 },

    #[error("Map is empty")]
    MapEmpty,

    #[error("Map has no {0} marker")]
    MapMissingMarker(&'static str),

    #[error("Map has more than one {0} marker")]
    MapDuplicateMarker(&'static str),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MazeError {
    /// Whether this error means the peer went away rather than something
    /// going wrong on our side.
    pub fn is_disconnect(&self) -> bool {
        match self {
            MazeError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::UnexpectedEof
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::NotConnected
            ),
            _ => false,
        }
    }
}
