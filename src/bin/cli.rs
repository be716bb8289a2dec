//! fogmaze CLI Client
//!
//! Interactive text client: type start, map, up/right/down/left, reset
//! or exit, one word at a time.

use std::io::{self, BufRead};

use clap::Parser;
use fogmaze::client::{render_response, Client, ClientCommand};
use tracing_subscriber::{fmt, EnvFilter};

/// fogmaze CLI
#[derive(Parser, Debug)]
#[command(name = "fogmaze-cli")]
#[command(about = "Text client for the fogmaze server")]
#[command(version)]
struct Args {
    /// Server host name or IP address
    server: String,

    /// Server port
    port: u16,
}

fn main() {
    // Logs go to stderr so they never interleave with the board
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut client = match Client::connect((args.server.as_str(), args.port)) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect to {}:{}: {}", args.server, args.port, e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        };

        for word in line.split_whitespace() {
            let command = ClientCommand::parse(word);
            let response = match client.send(command) {
                Ok(response) => response,
                Err(e) => {
                    tracing::debug!("Request failed: {}", e);
                    println!("Server disconnected.");
                    std::process::exit(1);
                }
            };

            if command == ClientCommand::Exit {
                return;
            }

            if let Some(text) = render_response(command, &response) {
                println!("{}", text.trim_end());
            }
        }
    }
}
