//! # echoline
//!
//! A tutorial-grade TCP line exchange:
//! - Server accepts a single client connection and answers each
//!   newline-terminated message with exactly one textual response
//! - Fixed commands: `time`, `uptime`, `help`, `exit`; everything else
//!   is echoed back
//! - Interactive line-oriented client console
//! - Fully synchronous, blocking I/O; no concurrency, no state across
//!   connections
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────┐    newline-delimited     ┌──────────────────┐
//! │      Client      │◄────── UTF-8 text ──────►│      Server      │
//! │ (interactive     │        over TCP          │ (accepts one     │
//! │  console loop)   │                          │  connection)     │
//! └──────────────────┘                          └────────┬─────────┘
//!                                                        │
//!                                               ┌────────▼─────────┐
//!                                               │     Session      │
//!                                               │ (receive/dispatch│
//!                                               │  /respond loop)  │
//!                                               └────────┬─────────┘
//!                                                        │
//!                                               ┌────────▼─────────┐
//!                                               │    Dispatcher    │
//!                                               │ (command table,  │
//!                                               │  uptime state)   │
//!                                               └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod dispatch;
pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use dispatch::{Dispatcher, Reply};
pub use error::{EchoError, Result};
pub use network::{Client, Server, Session};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of echoline
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
