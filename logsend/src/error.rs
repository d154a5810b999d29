// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Send error

use std::{fmt, io};

/// Error returned by any failed step of sending a record.
#[non_exhaustive]
#[derive(Debug)]
pub enum SendError {
    /// The destination host is empty
    EmptyHost,
    /// The port text is not an integer in `1..=65535`
    InvalidPort { value: String, reason: &'static str },
    /// Resolving or connecting to the destination failed
    Connect { destination: String, error: io::Error },
    /// Writing the serialized record failed
    Write { destination: String, error: io::Error },
}

impl std::error::Error for SendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SendError::Connect { error, .. } | SendError::Write { error, .. } => Some(error),
            SendError::EmptyHost | SendError::InvalidPort { .. } => None,
        }
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SendError::EmptyHost => write!(f, "destination host is empty"),
            SendError::InvalidPort { value, reason } => {
                write!(f, "invalid port {value:?}: {reason}")
            }
            SendError::Connect { destination, .. } => {
                write!(f, "failed to connect to {destination}")
            }
            SendError::Write { destination, .. } => {
                write!(f, "failed to write record to {destination}")
            }
        }
    }
}
