//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format
//!
//! ```text
//! client -> server:  <message>\n          (one line, UTF-8, trimmed)
//! server -> client:  <response>\n         (one frame per request; the
//!                                          welcome banner and `help`
//!                                          contain internal newlines)
//! ```
//!
//! ### Commands (matched case-insensitively)
//! - `time`   - current server time, `YYYY-MM-DD HH:MM:SS`
//! - `uptime` - elapsed since server start, `<H>h <M>m <S>s`
//! - `help`   - the command table as a list
//! - `exit`   - fixed goodbye, then the connection ends
//! - anything else is echoed back as `Server received "<text>"`

mod command;
mod codec;

pub use command::{
    command_table, echo_reply, help_text, welcome_text, Command, CommandKind, CommandSpec,
    COMMANDS, ECHO_ENTRY, GOODBYE,
};
pub use codec::{read_message, read_reply, write_message};
