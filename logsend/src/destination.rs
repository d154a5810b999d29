// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::SendError;
use crate::{DEFAULT_HOST, DEFAULT_PORT};
use std::fmt;

/// The endpoint a record is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    host: String,
    port: u16,
}

impl Destination {
    /// Create a destination. `host` may be a hostname or an IP literal.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, SendError> {
        let host = host.into();
        if host.is_empty() {
            return Err(SendError::EmptyHost);
        }
        if port == 0 {
            return Err(SendError::InvalidPort {
                value: port.to_string(),
                reason: "port must be in 1..=65535",
            });
        }
        Ok(Self { host, port })
    }

    /// Build a destination from optional command line values, applying defaults for
    /// missing ones.
    pub fn from_args(host: Option<&str>, port: Option<&str>) -> Result<Self, SendError> {
        let host = host.unwrap_or(DEFAULT_HOST);
        let port = port.map(parse_port).transpose()?.unwrap_or(DEFAULT_PORT);
        Self::new(host, port)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Parse a port number in `1..=65535`.
pub fn parse_port(value: &str) -> Result<u16, SendError> {
    let invalid = |reason| SendError::InvalidPort {
        value: value.to_string(),
        reason,
    };
    let port: i64 = value.parse().map_err(|_| invalid("not an integer"))?;
    match u16::try_from(port) {
        Ok(0) | Err(_) => Err(invalid("port must be in 1..=65535")),
        Ok(port) => Ok(port),
    }
}
