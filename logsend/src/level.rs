// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Labels longer than this many bytes are only matched on their prefix.
const MAX_LABEL_LEN: usize = 15;

/// Canonical severity level, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Classify a free-form severity label.
    ///
    /// Matching is ASCII case-insensitive and by substring, e.g. `dbg`, `Warning` and
    /// `FATAL` are recognized. Only the first 15 bytes are looked at, cut back to a char
    /// boundary. Unknown labels fall back to [`Level::Info`].
    pub fn classify(label: &str) -> Level {
        let mut end = label.len().min(MAX_LABEL_LEN);
        while !label.is_char_boundary(end) {
            end -= 1;
        }
        let label = label[..end].to_ascii_lowercase();
        let has = |patterns: &[&str]| patterns.iter().any(|p| label.contains(p));

        // First match wins
        if has(&["debug", "dbg"]) {
            Level::Debug
        } else if has(&["info"]) {
            Level::Info
        } else if has(&["warn"]) {
            Level::Warning
        } else if has(&["error", "err"]) {
            Level::Error
        } else if has(&["critical", "crit", "fatal"]) {
            Level::Critical
        } else {
            Level::Info
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
