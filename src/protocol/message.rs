//! Message definitions
//!
//! One physical layout is used for requests and responses; fields a
//! message does not use are zero-filled.

use crate::game::{Board, Direction, EMPTY_BOARD};

/// Number of slots in the move list
pub const MAX_MOVES: usize = 100;

/// Capacity of the error text field, including the NUL terminator
pub const ERROR_MESSAGE_LEN: usize = 256;

/// Error text for a blocked move
pub const ERR_CANNOT_MOVE: &str = "error: you cannot go this way";

/// Error text for an unrecognized request type
pub const ERR_COMMAND_NOT_FOUND: &str = "error: command not found";

/// Error text for any request before Start
pub const ERR_NOT_STARTED: &str = "error: start the game first";

/// Request and response type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MessageType {
    Start = 0,
    Move = 1,
    Map = 2,
    /// Reserved; the server does not implement it
    Hint = 3,
    Update = 4,
    Win = 5,
    Reset = 6,
    Exit = 7,
    Error = 8,
    GameOver = 9,
}

impl MessageType {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a type by its code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(MessageType::Start),
            1 => Some(MessageType::Move),
            2 => Some(MessageType::Map),
            3 => Some(MessageType::Hint),
            4 => Some(MessageType::Update),
            5 => Some(MessageType::Win),
            6 => Some(MessageType::Reset),
            7 => Some(MessageType::Exit),
            8 => Some(MessageType::Error),
            9 => Some(MessageType::GameOver),
            _ => None,
        }
    }
}

/// A wire message
///
/// The type is kept as the raw code so that unknown values survive
/// decoding and can be answered with an error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Request/response type code
    pub code: i32,

    /// Direction codes; the meaningful prefix ends at the first zero
    pub moves: [i32; MAX_MOVES],

    /// Board snapshot, row-major cell codes
    pub board: Board,

    /// Error text (responses of type Error only)
    pub error_message: String,
}

impl Message {
    /// An otherwise empty message of the given type
    pub fn new(kind: MessageType) -> Self {
        Self::with_code(kind.code())
    }

    /// An otherwise empty message with a raw type code
    pub fn with_code(code: i32) -> Self {
        Self {
            code,
            moves: [0; MAX_MOVES],
            board: EMPTY_BOARD,
            error_message: String::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Requests
    // -------------------------------------------------------------------------

    /// A Move request for `direction`
    pub fn move_request(direction: Direction) -> Self {
        let mut message = Self::new(MessageType::Move);
        message.moves[0] = direction.code();
        message
    }

    // -------------------------------------------------------------------------
    // Responses
    // -------------------------------------------------------------------------

    /// Update carrying a possible-moves list
    pub fn update_with_moves(directions: &[Direction]) -> Self {
        let mut message = Self::new(MessageType::Update);
        for (slot, direction) in message.moves.iter_mut().zip(directions) {
            *slot = direction.code();
        }
        message
    }

    /// Update carrying a board snapshot
    pub fn update_with_board(board: Board) -> Self {
        let mut message = Self::new(MessageType::Update);
        message.board = board;
        message
    }

    /// Win carrying the final board
    pub fn win(board: Board) -> Self {
        let mut message = Self::new(MessageType::Win);
        message.board = board;
        message
    }

    /// Error with a human-readable reason
    pub fn error(text: &str) -> Self {
        let mut message = Self::new(MessageType::Error);
        message.error_message = text.to_string();
        message
    }

    /// The session has concluded; empty payload
    pub fn game_over() -> Self {
        Self::new(MessageType::GameOver)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Decoded type, if the code is known
    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::from_code(self.code)
    }

    /// The zero-terminated prefix of the move list
    pub fn move_codes(&self) -> &[i32] {
        let len = self
            .moves
            .iter()
            .position(|&m| m == 0)
            .unwrap_or(MAX_MOVES);
        &self.moves[..len]
    }

    /// Move list as directions, skipping unknown codes
    pub fn directions(&self) -> Vec<Direction> {
        self.move_codes()
            .iter()
            .filter_map(|&code| Direction::from_code(code))
            .collect()
    }

    /// Direction requested by a Move (first slot of the move list)
    pub fn requested_direction(&self) -> Option<Direction> {
        Direction::from_code(self.moves[0])
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new(MessageType::Start)
    }
}
