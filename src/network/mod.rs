//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread (non-blocking accept, polls the shutdown flag)
//! - One worker thread per connection, each with its own Session
//! - No state is shared between connections except the read-only map

mod connection;
mod server;

pub use connection::Connection;
pub use server::Server;
