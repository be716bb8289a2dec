//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (fixed size)
//!
//! ```text
//! ┌──────────┬────────────────┬────────────────┬───────────────────┐
//! │ Type (4) │ Moves (100x4)  │ Board (10x10x4)│ Error text (256)  │
//! └──────────┴────────────────┴────────────────┴───────────────────┘
//! ```
//!
//! ### Type Codes
//! - 0: START     - 5: WIN
//! - 1: MOVE      - 6: RESET
//! - 2: MAP       - 7: EXIT
//! - 3: HINT      - 8: ERROR
//! - 4: UPDATE    - 9: GAMEOVER
//!
//! ### Direction Codes (move list)
//! - 1: UP  - 2: RIGHT  - 3: DOWN  - 4: LEFT

mod codec;
mod message;

pub use codec::{decode_message, encode_message, read_message, write_message, MESSAGE_SIZE};
pub use message::{
    Message, MessageType, ERROR_MESSAGE_LEN, ERR_CANNOT_MOVE, ERR_COMMAND_NOT_FOUND,
    ERR_NOT_STARTED, MAX_MOVES,
};
