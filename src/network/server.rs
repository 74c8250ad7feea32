//! TCP Server
//!
//! Binds the listening socket and serves exactly one client connection.

use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::{EchoError, Result};
use crate::network::session::Session;

/// How often the accept loop checks the shutdown flag
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TCP server for echoline
///
/// Accepts one inbound connection, runs its session to termination, and
/// returns. The listener and the accepted stream are released by `Drop` on
/// every exit path.
pub struct Server {
    /// Server configuration
    config: Config,

    /// Bound listening socket
    listener: TcpListener,

    /// Set by the interrupt handler; checked while waiting for a client
    shutdown: Arc<AtomicBool>,

    /// Uptime starts when the server starts, not when the client connects
    dispatcher: Dispatcher,
}

impl Server {
    /// Bind the listening socket
    ///
    /// Bind failure is fatal: callers report [`EchoError::Bind`] and exit
    /// non-zero.
    pub fn bind(config: Config) -> Result<Self> {
        let addr = config.addr();
        let listener = TcpListener::bind(&addr).map_err(|source| EchoError::Bind {
            addr: addr.clone(),
            source,
        })?;

        match listener.local_addr() {
            Ok(local) => tracing::info!("Server listening on {}", local),
            Err(_) => tracing::info!("Server listening on {}", addr),
        }

        Ok(Self {
            config,
            listener,
            shutdown: Arc::new(AtomicBool::new(false)),
            dispatcher: Dispatcher::new(),
        })
    }

    /// The actual bound address (useful when binding port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Shared flag for wiring up an interrupt handler
    pub fn shutdown_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Run the server (blocking)
    ///
    /// Blocks until one client connects, serves it to termination, and
    /// returns. An interrupt before any client connects shuts down without
    /// error. Session-level failures are logged, never propagated: once
    /// bound, the server's exit is clean.
    pub fn run(&mut self) -> Result<()> {
        let stream = match self.accept()? {
            Some(stream) => stream,
            None => {
                tracing::info!("Server interrupted before accepting a connection; shutting down");
                return Ok(());
            }
        };

        match Session::new(stream, self.dispatcher.clone(), self.config.buffer_size) {
            Ok(mut session) => {
                if let Err(e) = session.serve() {
                    tracing::warn!("Session with {} ended with error: {}", session.peer_addr(), e);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to set up session: {}", e);
            }
        }

        tracing::info!("Server shut down cleanly");
        Ok(())
    }

    /// Wait for exactly one connection, honoring the shutdown flag
    ///
    /// The listener polls non-blocking so an interrupt is noticed between
    /// accept attempts; the accepted stream is switched back to blocking.
    fn accept(&self) -> Result<Option<TcpStream>> {
        self.listener.set_nonblocking(true)?;

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                return Ok(None);
            }

            match self.listener.accept() {
                Ok((stream, peer)) => {
                    tracing::debug!("Accepted connection from {}", peer);
                    stream.set_nonblocking(false)?;
                    return Ok(Some(stream));
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    std::thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
