//! Client commands
//!
//! Words typed by the player, and the requests they turn into.

use std::str::FromStr;

use crate::game::Direction;
use crate::protocol::{Message, MessageType};

/// A command typed at the client prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Start,
    Map,
    Hint,
    Reset,
    Exit,
    Move(Direction),
    /// Anything else; sent anyway so the server can reject it
    Unrecognized,
}

impl ClientCommand {
    /// Parse a single word, case-insensitively. Never fails.
    pub fn parse(word: &str) -> Self {
        if let Ok(direction) = Direction::from_str(word) {
            return ClientCommand::Move(direction);
        }
        match word.to_ascii_lowercase().as_str() {
            "start" => ClientCommand::Start,
            "map" => ClientCommand::Map,
            "hint" => ClientCommand::Hint,
            "reset" => ClientCommand::Reset,
            "exit" => ClientCommand::Exit,
            _ => ClientCommand::Unrecognized,
        }
    }

    /// Type of request this command sends
    pub fn message_type(self) -> MessageType {
        match self {
            ClientCommand::Start => MessageType::Start,
            ClientCommand::Map => MessageType::Map,
            ClientCommand::Hint => MessageType::Hint,
            ClientCommand::Reset => MessageType::Reset,
            ClientCommand::Exit => MessageType::Exit,
            ClientCommand::Move(_) => MessageType::Move,
            // The server answers non-request codes with "command not found"
            ClientCommand::Unrecognized => MessageType::Error,
        }
    }

    /// Build the request message
    pub fn to_request(self) -> Message {
        match self {
            ClientCommand::Move(direction) => Message::move_request(direction),
            other => Message::new(other.message_type()),
        }
    }
}
