//! Session Handler
//!
//! Runs the receive-dispatch-respond loop for one accepted client.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::TcpStream;

use crate::dispatch::Dispatcher;
use crate::error::{EchoError, Result};
use crate::protocol::{read_message, welcome_text, write_message};

/// Handles a single client connection
pub struct Session {
    /// TCP stream reader (buffered; capacity is the configured buffer size)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Produces one response per received message
    dispatcher: Dispatcher,

    /// Peer address for logging
    peer_addr: String,
}

impl Session {
    /// Create a new session handler
    ///
    /// Sets up buffered I/O over cloned read/write handles.
    pub fn new(stream: TcpStream, dispatcher: Dispatcher, buffer_size: usize) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::with_capacity(buffer_size, read_stream),
            writer: BufWriter::new(write_stream),
            dispatcher,
            peer_addr,
        })
    }

    /// Serve the connection (blocking until it terminates)
    ///
    /// Sends the unsolicited welcome banner, then reads messages in a loop
    /// and sends exactly one response per message. Returns when the client
    /// disconnects, requests `exit`, or an error ends the connection.
    pub fn serve(&mut self) -> Result<()> {
        tracing::info!("Connection established with {}", self.peer_addr);

        // Welcome banner is eager, not a response to any request
        if !self.send(&welcome_text())? {
            return Ok(());
        }

        loop {
            let message = match read_message(&mut self.reader) {
                Ok(Some(message)) => message,
                Ok(None) => {
                    // Client disconnected gracefully
                    tracing::info!("Client {} closed the connection", self.peer_addr);
                    return Ok(());
                }
                Err(EchoError::Io(ref e)) if e.kind() == ErrorKind::ConnectionReset => {
                    tracing::debug!("Connection reset by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(EchoError::Io(ref e)) if e.kind() == ErrorKind::ConnectionAborted => {
                    tracing::debug!("Connection aborted by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(EchoError::Decode(reason)) => {
                    // Undecodable input ends the session, never the process
                    tracing::warn!("Dropping client {}: {}", self.peer_addr, reason);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            };

            tracing::debug!("Received from {}: {:?}", self.peer_addr, message);

            let reply = self.dispatcher.dispatch(&message);
            let sent = self.send(&reply.text)?;

            // `exit` terminates regardless of the send outcome
            if reply.close {
                tracing::info!(
                    "Client {} requested to close the connection; shutting down",
                    self.peer_addr
                );
                return Ok(());
            }

            if !sent {
                return Ok(());
            }
        }
    }

    /// Send one response frame
    ///
    /// Returns `Ok(false)` when the peer was already gone (logged, loop
    /// terminates gracefully); other I/O failures propagate.
    fn send(&mut self, text: &str) -> Result<bool> {
        match write_message(&mut self.writer, text) {
            Ok(()) => {
                tracing::debug!("Sent to {}: {:?}", self.peer_addr, text);
                Ok(true)
            }
            Err(EchoError::Io(ref e))
                if matches!(
                    e.kind(),
                    ErrorKind::BrokenPipe
                        | ErrorKind::ConnectionReset
                        | ErrorKind::ConnectionAborted
                ) =>
            {
                tracing::debug!(
                    "Client {} disconnected before response could be sent",
                    self.peer_addr
                );
                Ok(false)
            }
            Err(e) => {
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                Err(e)
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
