//! Dispatch Module
//!
//! The core request-to-response step, separated from socket I/O.
//!
//! ## Responsibilities
//! - Parse each received message against the command table
//! - Produce exactly one response per message
//! - Signal when the connection should end (`exit`)
//!
//! The session loop in `network::session` owns the sockets; this module
//! is pure so the whole command surface is testable without a connection.

use std::time::Instant;

use chrono::{Local, NaiveDateTime};

use crate::protocol::{echo_reply, help_text, Command, GOODBYE};

/// Format string for the `time` command
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A response plus the resulting loop transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to send back (newline delimiter added by the codec)
    pub text: String,

    /// True when the connection must terminate after the send
    pub close: bool,
}

/// Produces responses for one server session
///
/// Holds the session's start timestamp so `uptime` is a value on the
/// dispatcher rather than ambient global state. Clocks are injectable via
/// [`Dispatcher::dispatch_at`] for deterministic tests.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Monotonic timestamp captured at server start, read-only afterwards
    started: Instant,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher whose uptime starts now
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Create a dispatcher with an explicit start timestamp
    pub fn with_start(started: Instant) -> Self {
        Self { started }
    }

    /// Dispatch one trimmed message using the real clocks
    pub fn dispatch(&self, message: &str) -> Reply {
        self.dispatch_at(message, Instant::now(), Local::now().naive_local())
    }

    /// Dispatch one trimmed message at the given monotonic and wall times
    pub fn dispatch_at(&self, message: &str, now: Instant, wall: NaiveDateTime) -> Reply {
        match Command::parse(message) {
            Command::Exit => Reply {
                text: GOODBYE.to_string(),
                close: true,
            },
            Command::Help => Reply {
                text: help_text(),
                close: false,
            },
            Command::Time => Reply {
                text: wall.format(TIME_FORMAT).to_string(),
                close: false,
            },
            Command::Uptime => Reply {
                text: self.format_uptime(now),
                close: false,
            },
            Command::Echo(text) => Reply {
                text: echo_reply(&text),
                close: false,
            },
        }
    }

    /// Elapsed time since start as `<H>h <M>m <S>s`, whole seconds
    fn format_uptime(&self, now: Instant) -> String {
        let secs = now.saturating_duration_since(self.started).as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;
        format!("{}h {}m {}s", hours, minutes, seconds)
    }
}
