// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::io;

/// One log line as it travels over the wire: `[<severity>] <message>\n`.
///
/// Neither field is escaped. Newlines or brackets inside `message` are sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: String,
    pub message: String,
}

impl LogRecord {
    /// Create a new record.
    pub fn new(severity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: severity.into(),
            message: message.into(),
        }
    }

    pub fn encoded_len(&self) -> usize {
        let mut len: usize = 0;

        len += 1 + self.severity.len() + 1; // [severity]
        len += 1; // Separator
        len += self.message.len(); // Message
        len += 1; // Newline
        len
    }

    /// Encode the line into `w`. Returns the number of bytes written.
    pub fn encode<W: io::Write>(&self, mut w: W) -> io::Result<usize> {
        w.write_all(b"[")?;
        w.write_all(self.severity.as_bytes())?;
        w.write_all(b"] ")?;
        w.write_all(self.message.as_bytes())?;
        w.write_all(b"\n")?;
        Ok(self.encoded_len())
    }

    /// The encoded line in a single buffer.
    pub fn to_line(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.encoded_len());
        buffer.push(b'[');
        buffer.extend_from_slice(self.severity.as_bytes());
        buffer.extend_from_slice(b"] ");
        buffer.extend_from_slice(self.message.as_bytes());
        buffer.push(b'\n');
        buffer
    }

    /// Decode one received line.
    ///
    /// A leading `[...]` is taken as the severity and spaces after it are skipped. Lines
    /// without a bracketed prefix yield an empty severity. Returns `None` for empty lines.
    pub fn parse_line(line: &str) -> Option<LogRecord> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return None;
        }

        let record = line
            .strip_prefix('[')
            .and_then(|rest| rest.split_once(']'))
            .map(|(severity, message)| LogRecord::new(severity, message.trim_start_matches(' ')))
            .unwrap_or_else(|| LogRecord::new("", line));
        Some(record)
    }
}

impl fmt::Display for LogRecord {
    /// The line without its terminating newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
