// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics logger for `logsend`.
//!
//! Console backend for the `log` facade. Writes to `stderr` so that `stdout`
//! stays reserved for the send confirmation.

use log::{LevelFilter, Log, Metadata, Record};
use std::str::FromStr;
use std::time::SystemTime;

mod console;
pub mod fmt;

const ENV_RUST_LOG: &str = "RUST_LOG";

/// Initialize the logger.
///
/// A valid level passed as `RUST_LOG` environment variable overrides `level`.
/// Calling this more than once keeps the first logger.
pub fn init(level: LevelFilter) {
    let logger = Logger::new();

    // Set the maximum log level the log subsystem will forward to this logger impl.
    log::set_max_level(level_from_env().unwrap_or(level));
    // Set the logger in the global subsystem.
    if log::set_boxed_logger(Box::new(logger)).is_err() {
        eprintln!("Logger already initialized");
    }
}

/// The logsend logger.
#[derive(Debug, Default)]
pub struct Logger {
    console: console::Console,
}

impl Logger {
    /// Create a new logger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Log for Logger {
    /// Check if a log message with the specified metadata would be logged.
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Diagnostics are best effort. A closed stderr must not abort a send.
        let _ = self.console.write(SystemTime::now(), record);
    }

    fn flush(&self) {}
}

/// Try to parse the log level from the environment variable `RUST_LOG`.
fn level_from_env() -> Option<LevelFilter> {
    std::env::var(ENV_RUST_LOG).ok().and_then(|s| {
        LevelFilter::from_str(&s)
            .inspect_err(|_| eprintln!("Failed to parse log level from `RUST_LOG={s}`"))
            .ok()
    })
}
