//! # fogmaze
//!
//! A maze exploration game played over TCP:
//! - Fixed-size binary protocol (every message is 1060 bytes)
//! - Fog-of-war: the player only sees cells they have been near
//! - One private game per connection, no shared mutable state
//! - Text client that renders the server's board snapshots
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │              (one worker thread per client)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ fixed-size frames
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Session Handler                            │
//! │          (Unstarted / Active / Over dispatch)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  GameState  │◄─────────│   MazeMap   │
//!   │ (per client)│  Start/  │ (read-only) │
//!   └─────────────┘  Reset   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod game;
pub mod map;
pub mod protocol;
pub mod session;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MazeError, Result};
pub use config::Config;
pub use game::GameState;
pub use map::MazeMap;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fogmaze
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
