// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::destination::Destination;
use crate::error::SendError;
use crate::record::LogRecord;
use log::{debug, trace};
use std::io::Write;
use std::net::TcpStream;

/// Sends single records to a destination. Every send opens a fresh connection,
/// writes one line and closes it again. No reconnects, no retries, nothing is read back.
#[derive(Debug, Clone)]
pub struct LogSender {
    destination: Destination,
}

impl LogSender {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Send `[severity] message` to the destination.
    pub fn send(&self, severity: &str, message: &str) -> Result<(), SendError> {
        self.send_record(&LogRecord::new(severity, message))
    }

    /// Send `record` to the destination.
    pub fn send_record(&self, record: &LogRecord) -> Result<(), SendError> {
        // Encode up front so the line goes out in one write
        let buffer = record.to_line();

        let destination = &self.destination;
        debug!("Connecting to {destination}");
        let mut stream = TcpStream::connect((destination.host(), destination.port())).map_err(
            |error| SendError::Connect {
                destination: destination.to_string(),
                error,
            },
        )?;
        trace!(
            "Connected to {destination} via {:?}",
            stream.peer_addr().ok()
        );

        stream
            .write_all(&buffer)
            .map_err(|error| SendError::Write {
                destination: destination.to_string(),
                error,
            })?;
        trace!("Wrote {} bytes to {destination}", buffer.len());

        // Close the connection
        drop(stream);
        debug!("Closed connection to {destination}");
        Ok(())
    }
}

/// Send a single record to `destination`.
pub fn send(destination: &Destination, severity: &str, message: &str) -> Result<(), SendError> {
    LogSender::new(destination.clone()).send(severity, message)
}
