//! Session Protocol Handler
//!
//! Maps each request onto the game engine according to the lifecycle
//! state and builds the exact response. Knows nothing about sockets, so
//! a whole session can be driven from tests.
//!
//! ## Dispatch
//! ```text
//!              Unstarted            Active                 Over
//! START        load → moves         reload → moves         GAMEOVER
//! MOVE         not started          move → moves | WIN     GAMEOVER
//!                                   | cannot go
//! MAP          not started          fogged board           GAMEOVER
//! RESET        not started          reload → moves         reload → moves
//! EXIT         not started          empty UPDATE, close    empty UPDATE, close
//! other        not started          command not found      command not found
//! ```

use std::sync::Arc;

use crate::game::{GameState, Lifecycle, MoveOutcome};
use crate::map::MazeMap;
use crate::protocol::{
    Message, MessageType, ERR_CANNOT_MOVE, ERR_COMMAND_NOT_FOUND, ERR_NOT_STARTED,
};

/// Response to a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message to send back
    pub message: Message,

    /// Close the connection after sending
    pub close: bool,
}

impl Reply {
    fn send(message: Message) -> Self {
        Self {
            message,
            close: false,
        }
    }

    fn send_and_close(message: Message) -> Self {
        Self {
            message,
            close: true,
        }
    }
}

/// One client's game session
pub struct Session {
    /// Pristine map, copied in on Start/Reset
    map: Arc<MazeMap>,

    /// This session's private game state
    state: GameState,
}

impl Session {
    /// Create a session in the Unstarted state
    pub fn new(map: Arc<MazeMap>) -> Self {
        Self {
            map,
            state: GameState::new(),
        }
    }

    /// Handle one request and produce the response
    pub fn handle(&mut self, request: &Message) -> Reply {
        let kind = request.message_type();
        let lifecycle = self.state.lifecycle();
        tracing::debug!(code = request.code, ?kind, ?lifecycle, "Dispatching request");

        match lifecycle {
            Lifecycle::Unstarted if kind != Some(MessageType::Start) => {
                Reply::send(Message::error(ERR_NOT_STARTED))
            }
            _ if kind == Some(MessageType::Exit) => self.handle_exit(),
            Lifecycle::Over => match kind {
                Some(MessageType::Reset) => self.handle_reset(),
                Some(MessageType::Start | MessageType::Move | MessageType::Map) => {
                    Reply::send(Message::game_over())
                }
                _ => Reply::send(Message::error(ERR_COMMAND_NOT_FOUND)),
            },
            Lifecycle::Unstarted | Lifecycle::Active => match kind {
                Some(MessageType::Start) => self.handle_start(),
                Some(MessageType::Move) => self.handle_move(request),
                Some(MessageType::Map) => self.handle_map(),
                Some(MessageType::Reset) => self.handle_reset(),
                _ => Reply::send(Message::error(ERR_COMMAND_NOT_FOUND)),
            },
        }
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    fn handle_start(&mut self) -> Reply {
        self.state.load(&self.map);
        Reply::send(Message::update_with_moves(&self.state.possible_moves()))
    }

    fn handle_move(&mut self, request: &Message) -> Reply {
        let outcome = match request.requested_direction() {
            Some(direction) => self.state.attempt_move(direction),
            None => MoveOutcome::Blocked,
        };

        match outcome {
            MoveOutcome::Blocked => Reply::send(Message::error(ERR_CANNOT_MOVE)),
            MoveOutcome::Moved => {
                Reply::send(Message::update_with_moves(&self.state.possible_moves()))
            }
            MoveOutcome::Escaped => Reply::send(Message::win(self.state.revealed_board())),
        }
    }

    fn handle_map(&self) -> Reply {
        Reply::send(Message::update_with_board(self.state.snapshot_for_client()))
    }

    fn handle_reset(&mut self) -> Reply {
        self.state.load(&self.map);
        Reply::send(Message::update_with_moves(&self.state.possible_moves()))
    }

    fn handle_exit(&self) -> Reply {
        tracing::info!("client disconnected");
        Reply::send_and_close(Message::new(MessageType::Update))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle()
    }
}
