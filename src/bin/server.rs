//! echoline Server Binary
//!
//! Starts the TCP server, serves one connection, exits.

use clap::Parser;
use echoline::{Config, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// echoline Server
#[derive(Parser, Debug)]
#[command(name = "echoline-server")]
#[command(about = "Single-connection TCP echo/command server")]
#[command(version)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Read buffer size in bytes
    #[arg(short, long, default_value = "1024")]
    buffer_size: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,echoline=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("echoline Server v{}", echoline::VERSION);

    // Build config from args
    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .buffer_size(args.buffer_size)
        .build();

    // Bind failure is the one fatal error: report and exit non-zero
    let mut server = match Server::bind(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    // Ctrl+C before a client connects shuts down without error
    let shutdown = server.shutdown_flag();
    if let Err(e) = ctrlc::set_handler(move || {
        tracing::info!("Interrupt received; shutting down");
        shutdown.store(true, std::sync::atomic::Ordering::Relaxed);
    }) {
        tracing::warn!("Failed to install interrupt handler: {}", e);
    }

    // Once bound, the server always exits zero; run() logs session-level
    // failures and only surfaces listener breakage
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
    }
}
