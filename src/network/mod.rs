//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single-threaded, blocking I/O on both ends
//! - Server accepts exactly one connection, serves it, exits
//! - One response per request, strictly ordered, no pipelining

mod client;
mod server;
mod session;

pub use client::Client;
pub use server::Server;
pub use session::Session;
