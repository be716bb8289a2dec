//! Configuration for fogmaze
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a fogmaze server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Map Configuration
    // -------------------------------------------------------------------------
    /// Map file loaded at startup and copied into every new game
    pub map_path: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Max concurrent client sessions (1 = one player at a time)
    pub max_connections: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("./maze.txt"),
            listen_addr: "0.0.0.0:51511".to_string(),
            max_connections: 16,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the map file path
    pub fn map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.map_path = path.into();
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the maximum number of concurrent sessions
    pub fn max_connections(mut self, count: usize) -> Self {
        self.config.max_connections = count;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
