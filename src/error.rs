//! Error types for echoline
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using EchoError
pub type Result<T> = std::result::Result<T, EchoError>;

/// Unified error type for echoline operations
#[derive(Debug, Error)]
pub enum EchoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Server Errors
    // -------------------------------------------------------------------------
    /// Bind failure is fatal: the server binary reports it and exits non-zero.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Client Connect Errors
    // -------------------------------------------------------------------------
    /// No listener at the target address.
    #[error("connection refused by {addr}")]
    Refused { addr: String },

    /// Handshake did not complete within the configured timeout.
    #[error("connection to {addr} timed out")]
    ConnectTimeout { addr: String },

    /// Any other OS-level connect failure (unreachable network, etc.).
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Received bytes were not valid UTF-8.
    #[error("decode error: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
