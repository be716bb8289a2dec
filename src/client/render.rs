//! Text rendering of server responses

use std::fmt::Write as _;

use super::ClientCommand;
use crate::game::{Board, Cell, Direction, MAX_COLS, MAX_ROWS};
use crate::protocol::{Message, MessageType};

/// Symbol for a cell code on the printed board
fn symbol(code: i32) -> String {
    match Cell::from_code(code) {
        Some(Cell::Player) => "+".to_string(),
        Some(Cell::Exit) => "X".to_string(),
        Some(Cell::Path) => "_".to_string(),
        Some(Cell::Wall) => "#".to_string(),
        Some(Cell::Start) => ">".to_string(),
        Some(Cell::Fog) => "?".to_string(),
        _ => code.to_string(),
    }
}

/// Extent of the board: rows and columns up to the first all-padding one
pub fn board_dimensions(board: &Board) -> (usize, usize) {
    let padding = Cell::Padding.code();
    let rows = (0..MAX_ROWS)
        .take_while(|&r| board[r].iter().any(|&c| c != padding))
        .count();
    let cols = (0..MAX_COLS)
        .take_while(|&c| board.iter().any(|row| row[c] != padding))
        .count();
    (rows, cols)
}

/// Board as text, one line per row, padding cells skipped
pub fn render_board(board: &Board) -> String {
    let (rows, cols) = board_dimensions(board);
    let mut out = String::new();
    for row in board.iter().take(rows) {
        for &code in row.iter().take(cols) {
            if code == Cell::Padding.code() {
                continue;
            }
            let _ = write!(out, "{} ", symbol(code));
        }
        out.push('\n');
    }
    out
}

/// "Possible moves: up, right."
pub fn render_moves(directions: &[Direction]) -> String {
    let names: Vec<&str> = directions.iter().map(|d| d.name()).collect();
    format!("Possible moves: {}.", names.join(", "))
}

/// What the client prints for `response` to `command`
///
/// Returns `None` when nothing should be printed.
pub fn render_response(command: ClientCommand, response: &Message) -> Option<String> {
    match response.message_type() {
        Some(MessageType::Win) => Some(format!("You escaped!\n{}", render_board(&response.board))),
        Some(MessageType::Update) => match command {
            ClientCommand::Start | ClientCommand::Move(_) | ClientCommand::Reset => {
                Some(render_moves(&response.directions()))
            }
            ClientCommand::Map => Some(render_board(&response.board)),
            _ => None,
        },
        Some(MessageType::GameOver) => None,
        Some(MessageType::Error) => Some(response.error_message.clone()),
        _ => Some("Unknown server response.".to_string()),
    }
}
