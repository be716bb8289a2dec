//! fogmaze Server Binary
//!
//! Loads the map and starts the TCP server.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use fogmaze::network::Server;
use fogmaze::{Config, MazeMap};
use tracing_subscriber::{fmt, EnvFilter};

/// Address family to listen on
#[derive(Debug, Clone, Copy, ValueEnum)]
enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    fn listen_addr(self, port: u16) -> String {
        match self {
            IpVersion::V4 => format!("0.0.0.0:{port}"),
            IpVersion::V6 => format!("[::]:{port}"),
        }
    }
}

/// fogmaze Server
#[derive(Parser, Debug)]
#[command(name = "fogmaze-server")]
#[command(about = "Fog-of-war maze game server")]
#[command(version)]
struct Args {
    /// IP version to listen on
    #[arg(value_enum)]
    ip_version: IpVersion,

    /// TCP port
    port: u16,

    /// Map file
    #[arg(short, long)]
    input: String,

    /// Maximum concurrent sessions (1 serves one player at a time)
    #[arg(short, long, default_value = "16")]
    max_connections: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fogmaze=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("fogmaze Server v{}", fogmaze::VERSION);
    tracing::info!("Map file: {}", args.input);

    let config = Config::builder()
        .map_path(&args.input)
        .listen_addr(args.ip_version.listen_addr(args.port))
        .max_connections(args.max_connections)
        .build();

    // A bad map is fatal before any client is accepted
    let map = match MazeMap::load(&config.map_path) {
        Ok(map) => Arc::new(map),
        Err(e) => {
            tracing::error!("Failed to load map {}: {}", config.map_path.display(), e);
            std::process::exit(1);
        }
    };

    tracing::info!("Map loaded: {}x{}", map.rows(), map.cols());

    let server = match Server::bind(config, map) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
