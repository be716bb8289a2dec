//! Client Module
//!
//! The player's side of the protocol: parse typed words into requests,
//! exchange them with the server, and render the replies as text.

mod command;
mod render;

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::Result;
use crate::protocol::{read_message, write_message, Message};

pub use command::ClientCommand;
pub use render::{board_dimensions, render_board, render_moves, render_response};

/// A connection to a fogmaze server
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to the first address `addr` resolves to that accepts
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        let read_stream = stream.try_clone()?;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
        })
    }

    /// Send a request and wait for its response
    pub fn request(&mut self, message: &Message) -> Result<Message> {
        write_message(&mut self.writer, message)?;
        read_message(&mut self.reader)
    }

    /// Shorthand for sending a typed command
    pub fn send(&mut self, command: ClientCommand) -> Result<Message> {
        self.request(&command.to_request())
    }
}
