//! Protocol codec
//!
//! Reading and writing newline-delimited UTF-8 text frames.
//!
//! ## Wire Format
//!
//! Requests are single lines terminated by `\n`. Responses are one frame
//! per request, also newline-terminated; a response may contain internal
//! newlines (the welcome banner and `help` are multi-line). Messages are
//! trimmed of surrounding whitespace on receipt.

use std::io::{BufRead, ErrorKind, Read, Write};

use crate::error::{EchoError, Result};

// =============================================================================
// Message Reading/Writing (server side, line-framed)
// =============================================================================

/// Read one newline-terminated message.
///
/// Returns `Ok(None)` on orderly EOF (peer closed). A line longer than the
/// reader's buffer is reassembled across reads by the `BufRead` scan.
pub fn read_message<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            Err(EchoError::Decode(format!("message was not valid UTF-8: {}", e)))
        }
        Err(e) => Err(e.into()),
    }
}

/// Write one message followed by the newline delimiter, then flush.
pub fn write_message<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Reply Reading (client side, bounded chunk)
// =============================================================================

/// Read one reply frame with a single bounded read.
///
/// One `read` call so a multi-line response arrives as one unit. Returns
/// `Ok(None)` on orderly EOF. A reply longer than `buffer_size` bytes is
/// truncated to the first chunk; see the framing note in DESIGN.md.
pub fn read_reply<R: Read>(reader: &mut R, buffer_size: usize) -> Result<Option<String>> {
    let mut buf = vec![0u8; buffer_size];
    let n = reader.read(&mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    let text = std::str::from_utf8(&buf[..n])
        .map_err(|e| EchoError::Decode(format!("reply was not valid UTF-8: {}", e)))?;
    Ok(Some(text.trim().to_string()))
}
