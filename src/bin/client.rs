//! echoline Client Binary
//!
//! Interactive console client for the echoline server.

use std::io::{self, BufReader};
use std::time::Duration;

use clap::Parser;
use echoline::{Client, Config, EchoError};
use tracing_subscriber::{fmt, EnvFilter};

/// echoline Client
#[derive(Parser, Debug)]
#[command(name = "echoline-client")]
#[command(about = "Interactive console client for the echoline server")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Connect timeout in seconds
    #[arg(short, long, default_value = "5")]
    timeout_secs: u64,
}

fn main() {
    // Diagnostics only; the conversation itself goes to stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .connect_timeout(Duration::from_secs(args.timeout_secs))
        .build();

    // Ctrl+C anywhere in the loop terminates with a notice; sockets are
    // released on process exit
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nInterrupted; closing client.");
        std::process::exit(0);
    }) {
        tracing::warn!("Failed to install interrupt handler: {}", e);
    }

    // Each connect failure kind gets its own message; all exit cleanly
    let mut client = match Client::connect(&config) {
        Ok(c) => c,
        Err(EchoError::Refused { addr }) => {
            eprintln!(
                "Could not connect to server at {} (connection refused). Is the server running?",
                addr
            );
            return;
        }
        Err(EchoError::ConnectTimeout { addr }) => {
            eprintln!(
                "Connection attempt to {} timed out after {}s.",
                addr, args.timeout_secs
            );
            return;
        }
        Err(e) => {
            eprintln!("Failed to connect: {}", e);
            return;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = client.run(BufReader::new(stdin.lock()), stdout.lock()) {
        eprintln!("Client error: {}", e);
    }

    // Close the connection before the final notice
    drop(client);
    println!("Client shut down cleanly.");
}
