//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//! ```text
//! ┌──────────┬────────────────┬────────────────┬───────────────────┐
//! │ Type (4) │ Moves (100x4)  │ Board (10x10x4)│ Error text (256)  │
//! └──────────┴────────────────┴────────────────┴───────────────────┘
//! ```
//! Every integer is a big-endian i32. The error text is NUL-terminated
//! and zero-padded. Total size is always `MESSAGE_SIZE` bytes.

use std::io::{Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::message::{Message, ERROR_MESSAGE_LEN, MAX_MOVES};
use crate::error::{MazeError, Result};
use crate::game::{MAX_COLS, MAX_ROWS};

/// Size of every message on the wire
pub const MESSAGE_SIZE: usize = 4 + MAX_MOVES * 4 + MAX_ROWS * MAX_COLS * 4 + ERROR_MESSAGE_LEN;

// =============================================================================
// Encoding/Decoding
// =============================================================================

/// Encode a message to exactly `MESSAGE_SIZE` bytes
pub fn encode_message(message: &Message) -> Bytes {
    let mut buf = BytesMut::with_capacity(MESSAGE_SIZE);

    buf.put_i32(message.code);
    for &code in &message.moves {
        buf.put_i32(code);
    }
    for row in &message.board {
        for &cell in row {
            buf.put_i32(cell);
        }
    }

    let text = error_text_bytes(&message.error_message);
    buf.put_slice(text);
    buf.put_bytes(0, ERROR_MESSAGE_LEN - text.len());

    buf.freeze()
}

/// Decode a message from bytes
///
/// Only a buffer shorter than `MESSAGE_SIZE` is rejected; field values
/// are not validated here. Trailing bytes are ignored.
pub fn decode_message(bytes: &[u8]) -> Result<Message> {
    if bytes.len() < MESSAGE_SIZE {
        return Err(MazeError::Protocol(format!(
            "Incomplete message: expected {} bytes, got {}",
            MESSAGE_SIZE,
            bytes.len()
        )));
    }

    let mut buf = &bytes[..MESSAGE_SIZE];
    let mut message = Message::with_code(buf.get_i32());

    for slot in message.moves.iter_mut() {
        *slot = buf.get_i32();
    }
    for row in message.board.iter_mut() {
        for cell in row.iter_mut() {
            *cell = buf.get_i32();
        }
    }

    let text = &buf[..ERROR_MESSAGE_LEN];
    let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
    message.error_message = String::from_utf8_lossy(&text[..end]).into_owned();

    Ok(message)
}

/// Error text truncated to leave room for the terminator, on a char boundary
fn error_text_bytes(text: &str) -> &[u8] {
    let mut end = text.len().min(ERROR_MESSAGE_LEN - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text.as_bytes()[..end]
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one complete message from a stream
///
/// Blocks until `MESSAGE_SIZE` bytes arrive. A stream that ends early
/// yields an `UnexpectedEof` I/O error.
pub fn read_message<R: Read>(reader: &mut R) -> Result<Message> {
    let mut frame = [0u8; MESSAGE_SIZE];
    reader.read_exact(&mut frame)?;
    decode_message(&frame)
}

/// Write one message to a stream and flush it
pub fn write_message<W: Write>(writer: &mut W, message: &Message) -> Result<()> {
    let bytes = encode_message(message);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
