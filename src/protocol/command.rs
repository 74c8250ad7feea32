//! Command definitions
//!
//! The fixed command set and the ordered command table. The table is the
//! single source of truth: both dispatch and the `help`/welcome listings
//! are derived from it.

/// What the dispatcher does with a recognized command name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Time,
    Uptime,
    Help,
    Exit,
}

/// One row of the command table
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Wire name, matched case-insensitively
    pub name: &'static str,

    /// One-line description shown by `help` and the welcome banner
    pub description: &'static str,

    /// Dispatch target
    pub kind: CommandKind,
}

/// The recognized commands, in the order `help` lists them
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "time",
        description: "current server time",
        kind: CommandKind::Time,
    },
    CommandSpec {
        name: "uptime",
        description: "time since server start",
        kind: CommandKind::Uptime,
    },
    CommandSpec {
        name: "help",
        description: "list available commands",
        kind: CommandKind::Help,
    },
    CommandSpec {
        name: "exit",
        description: "close the connection",
        kind: CommandKind::Exit,
    },
];

/// The implicit echo row appended to the table listings
pub const ECHO_ENTRY: (&str, &str) = ("(any text)", "echoed back to you");

/// Fixed goodbye sent in response to `exit`
pub const GOODBYE: &str = "Goodbye from server.";

/// A parsed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the current wall-clock time
    Time,

    /// Send the elapsed time since server start
    Uptime,

    /// Send the command table
    Help,

    /// Send the goodbye and end the connection
    Exit,

    /// Anything unrecognized: echo it back
    Echo(String),
}

impl Command {
    /// Parse one trimmed message line. Matching against the command table
    /// is case-insensitive; everything else falls through to echo.
    pub fn parse(line: &str) -> Command {
        for spec in COMMANDS {
            if line.eq_ignore_ascii_case(spec.name) {
                return match spec.kind {
                    CommandKind::Time => Command::Time,
                    CommandKind::Uptime => Command::Uptime,
                    CommandKind::Help => Command::Help,
                    CommandKind::Exit => Command::Exit,
                };
            }
        }
        Command::Echo(line.to_string())
    }
}

// =============================================================================
// Response Text Producers
// =============================================================================

/// The command table formatted as a list, one line per command plus the
/// implicit echo entry.
pub fn command_table() -> String {
    let mut lines = Vec::with_capacity(COMMANDS.len() + 1);
    for spec in COMMANDS {
        lines.push(format!("  {:<10} - {}", spec.name, spec.description));
    }
    let (echo_name, echo_desc) = ECHO_ENTRY;
    lines.push(format!("  {:<10} - {}", echo_name, echo_desc));
    lines.join("\n")
}

/// The `help` response
pub fn help_text() -> String {
    format!("Available commands:\n{}", command_table())
}

/// The unsolicited welcome banner sent on accept
pub fn welcome_text() -> String {
    format!(
        "Welcome to the echoline server.\nAvailable commands:\n{}",
        command_table()
    )
}

/// The echo response for an unrecognized message
pub fn echo_reply(message: &str) -> String {
    format!("Server received \"{}\"", message)
}
