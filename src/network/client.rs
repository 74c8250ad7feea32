//! TCP Client
//!
//! Connects to the server and runs the interactive console loop.
//!
//! Console text goes through the caller-supplied writer so the loop can be
//! driven by scripted input in tests; diagnostics go through `tracing`.

use std::io::{BufRead, ErrorKind, Write};
use std::net::{TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::{EchoError, Result};
use crate::protocol::{read_reply, write_message, Command};

/// Interactive client for one echoline connection
pub struct Client {
    /// Connected stream; closed by `Drop` on every exit path
    stream: TcpStream,

    /// Size of the bounded reply read
    buffer_size: usize,

    /// Server address for console messages
    peer_addr: String,
}

impl Client {
    /// Connect to the configured server
    ///
    /// Uses the connect timeout from the config and maps the three failure
    /// kinds (refused, timed out, other OS error) to distinct variants so
    /// each gets its own user-facing message.
    pub fn connect(config: &Config) -> Result<Self> {
        let addr_str = config.addr();
        let addr = addr_str
            .to_socket_addrs()
            .map_err(|e| EchoError::Config(format!("cannot resolve {}: {}", addr_str, e)))?
            .next()
            .ok_or_else(|| EchoError::Config(format!("no usable address for {}", addr_str)))?;

        let stream =
            TcpStream::connect_timeout(&addr, config.connect_timeout).map_err(|e| match e.kind() {
                ErrorKind::ConnectionRefused => EchoError::Refused {
                    addr: addr_str.clone(),
                },
                ErrorKind::TimedOut | ErrorKind::WouldBlock => EchoError::ConnectTimeout {
                    addr: addr_str.clone(),
                },
                _ => EchoError::Connect {
                    addr: addr_str.clone(),
                    source: e,
                },
            })?;
        stream.set_nodelay(true)?;

        tracing::debug!("Connected to {}", addr_str);

        Ok(Self {
            stream,
            buffer_size: config.buffer_size,
            peer_addr: addr_str,
        })
    }

    /// Run the interactive loop (blocking)
    ///
    /// Reads operator lines from `input`, sends each non-empty one, and
    /// prints the paired reply to `output`. Returns when the operator
    /// signals end-of-input, requests `exit`, or the connection ends.
    /// Socket failures terminate the loop with a notice, never an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Connected to server at {}", self.peer_addr)?;

        // The welcome banner arrives unsolicited, before any request
        match self.recv() {
            Ok(Some(banner)) => writeln!(output, "{}", banner)?,
            Ok(None) => {
                writeln!(output, "Server closed the connection.")?;
                return Ok(());
            }
            Err(e) => {
                tracing::debug!("Failed to read welcome banner: {}", e);
                writeln!(output, "Connection to server lost.")?;
                return Ok(());
            }
        }

        writeln!(output, "Type messages and press Enter to send.")?;
        writeln!(output, "Type \"exit\" to close the connection cleanly.")?;
        writeln!(output)?;

        loop {
            write!(output, "You: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "End of input; closing client.")?;
                break;
            }

            let message = line.trim();
            if message.is_empty() {
                // Empty lines are never transmitted
                continue;
            }

            if let Err(e) = write_message(&mut self.stream, message) {
                tracing::debug!("Send to {} failed: {}", self.peer_addr, e);
                writeln!(output, "Lost connection to the server while sending.")?;
                break;
            }

            if Command::parse(message) == Command::Exit {
                // Best-effort read of the server's goodbye
                if let Ok(Some(goodbye)) = self.recv() {
                    writeln!(output, "Server: {}", goodbye)?;
                }
                writeln!(output, "Disconnected from server by request.")?;
                break;
            }

            // Exactly one reply per request
            match self.recv() {
                Ok(Some(reply)) => writeln!(output, "Server: {}", reply)?,
                Ok(None) => {
                    writeln!(output, "Server closed the connection.")?;
                    break;
                }
                Err(EchoError::Io(ref e)) if e.kind() == ErrorKind::ConnectionReset => {
                    writeln!(output, "Connection reset by server.")?;
                    break;
                }
                Err(e) => {
                    tracing::debug!("Receive from {} failed: {}", self.peer_addr, e);
                    writeln!(output, "Connection to server lost.")?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// One bounded read of the next reply frame
    fn recv(&mut self) -> Result<Option<String>> {
        read_reply(&mut self.stream, self.buffer_size)
    }
}
