//! TCP Server
//!
//! Accepts connections and dispatches each to its own worker thread.

use std::collections::HashMap;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::sync::WaitGroup;
use parking_lot::Mutex;

use super::Connection;
use crate::config::Config;
use crate::error::{MazeError, Result};
use crate::map::MazeMap;

/// How long the accept loop sleeps when no client is waiting
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Live connections, kept so shutdown can wake blocked workers
#[derive(Default)]
struct ConnectionRegistry {
    next_id: AtomicU64,
    live: Mutex<HashMap<u64, TcpStream>>,
}

impl ConnectionRegistry {
    fn insert(&self, stream: &TcpStream) -> Result<u64> {
        let handle = stream.try_clone()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.live.lock().insert(id, handle);
        Ok(id)
    }

    fn remove(&self, id: u64) {
        self.live.lock().remove(&id);
    }

    fn len(&self) -> usize {
        self.live.lock().len()
    }

    fn close_all(&self) {
        for stream in self.live.lock().values() {
            let _ = stream.shutdown(Shutdown::Both);
        }
    }
}

/// TCP server for fogmaze
pub struct Server {
    config: Config,
    map: Arc<MazeMap>,
    listener: TcpListener,
    shutdown: Arc<AtomicBool>,
    registry: Arc<ConnectionRegistry>,
}

impl Server {
    /// Bind the listen address from `config`
    ///
    /// The map must already be loaded; every session copies it on Start.
    pub fn bind(config: Config, map: Arc<MazeMap>) -> Result<Self> {
        if config.max_connections == 0 {
            return Err(MazeError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }

        let listener = TcpListener::bind(&config.listen_addr)?;

        Ok(Self {
            config,
            map,
            listener,
            shutdown: Arc::new(AtomicBool::new(false)),
            registry: Arc::new(ConnectionRegistry::default()),
        })
    }

    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Flag that stops `run` when set
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Number of sessions currently being served
    pub fn active_sessions(&self) -> usize {
        self.registry.len()
    }

    /// Start the server (blocking)
    ///
    /// Returns once shutdown is signalled and every worker has finished.
    pub fn run(&self) -> Result<()> {
        self.listener.set_nonblocking(true)?;
        tracing::info!("Listening on {}", self.local_addr()?);

        let workers = WaitGroup::new();

        while !self.shutdown.load(Ordering::Relaxed) {
            match self.listener.accept() {
                Ok((stream, addr)) => self.dispatch(stream, addr, workers.clone()),
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) => tracing::warn!("Error accepting connection: {}", e),
            }
        }

        tracing::info!(
            "Shutting down, closing {} active session(s)",
            self.active_sessions()
        );
        self.registry.close_all();
        workers.wait();

        Ok(())
    }

    /// Hand an accepted stream to a new worker thread
    fn dispatch(&self, stream: TcpStream, addr: SocketAddr, worker: WaitGroup) {
        let active = self.registry.len();
        if active >= self.config.max_connections {
            tracing::warn!(
                "Rejecting {}: {} of {} sessions in use",
                addr,
                active,
                self.config.max_connections
            );
            return;
        }

        // Some platforms hand out sockets that inherit the listener's mode
        if let Err(e) = stream.set_nonblocking(false) {
            tracing::warn!("Failed to configure stream from {}: {}", addr, e);
            return;
        }

        let id = match self.registry.insert(&stream) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Failed to register connection from {}: {}", addr, e);
                return;
            }
        };

        let map = Arc::clone(&self.map);
        let registry = Arc::clone(&self.registry);
        let spawned = thread::Builder::new()
            .name(format!("session-{id}"))
            .spawn(move || {
                let _worker = worker;
                tracing::info!("client connected: {}", addr);

                match Connection::new(stream, map) {
                    Ok(mut connection) => {
                        if let Err(e) = connection.handle() {
                            tracing::warn!("Session with {} ended with error: {}", addr, e);
                        }
                    }
                    Err(e) => tracing::warn!("Failed to set up connection {}: {}", addr, e),
                }

                registry.remove(id);
            });

        if let Err(e) = spawned {
            tracing::error!("Failed to spawn worker for {}: {}", addr, e);
            self.registry.remove(id);
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
