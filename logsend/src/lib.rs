// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Send a single log line to a TCP endpoint.
//!
//! The wire format is one line of UTF-8 text, `[<severity>] <message>\n`, on a
//! connection that is closed right after the write.

mod destination;
mod error;
mod level;
mod record;
mod sender;

pub use destination::{parse_port, Destination};
pub use error::SendError;
pub use level::Level;
pub use record::LogRecord;
pub use sender::{send, LogSender};

/// Host used when none is given
pub const DEFAULT_HOST: &str = "localhost";
/// Port used when none is given
pub const DEFAULT_PORT: u16 = 8080;
