// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use console::{style, Color, StyledObject};
use log::{Level, Record};
use std::io;
use std::process;
use std::sync::atomic::{self, AtomicUsize, Ordering};
use std::time::SystemTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

static TARGET_SIZE: atomic::AtomicUsize = atomic::AtomicUsize::new(16);
static PID_SIZE: atomic::AtomicUsize = atomic::AtomicUsize::new(4);

/// Format `record` as one diagnostics line into `writer`.
pub fn format<W: io::Write>(
    timestamp: SystemTime,
    record: &Record,
    mut writer: W,
) -> Result<(), io::Error> {
    let timestamp = OffsetDateTime::from(timestamp)
        .format(TIMESTAMP_FORMAT)
        .map_err(io::Error::other)?;

    let level = {
        let level_color = match record.level() {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Color256(243),
            Level::Trace => Color::White,
        };
        style(record.level()).for_stderr().bold().fg(level_color)
    };

    let pid = format_id(process::id(), &PID_SIZE);

    let target = {
        let target = record.target();
        TARGET_SIZE.fetch_max(target.len(), Ordering::Relaxed);
        let target_size = TARGET_SIZE.load(Ordering::Relaxed);
        let target_color = target.color();
        style(format!("{target:<s$}", s = target_size))
            .for_stderr()
            .fg(target_color)
    };

    let message = record.args();

    // Log location on trace level - otherwise just the message.
    if record.level() == Level::Trace {
        let file = record.file().unwrap_or("file unknown");
        let file = style(file).for_stderr().fg(file.color());
        let line = record.line().unwrap_or(0);
        writeln!(
            writer,
            "{timestamp} {target} ({pid}): {level:<5}: {file}:{line}: {message}",
        )
    } else {
        writeln!(writer, "{timestamp} {target} ({pid}): {level:<5}: {message}")
    }
}

/// Generate a color of `self`.
trait HashColor {
    fn color(&self) -> Color;
}

impl HashColor for &str {
    fn color(&self) -> Color {
        let hash = self.bytes().fold(42u8, |c, x| c ^ x);
        Color::Color256(hash)
    }
}

impl HashColor for u32 {
    fn color(&self) -> Color {
        // Some colors are hard to read on dark terminals
        let color = match *self as u8 {
            c @ 0..=1 => c + 2,
            c @ 16..=21 => c + 6,
            c @ 52..=55 | c @ 126..=129 => c + 4,
            c @ 163..=165 | c @ 200..=201 => c + 3,
            c @ 207 => c + 1,
            c @ 232..=240 => c + 9,
            c => c,
        };
        Color::Color256(color)
    }
}

/// Format `id` as hex with a color based on the hash of `id`. Update `g` with the
/// maximum length of the formatted `id`.
fn format_id(id: u32, g: &AtomicUsize) -> StyledObject<String> {
    let id_len = num_hex_digits(id);
    let color = id.color();
    g.fetch_max(id_len, Ordering::Relaxed);
    let len = g.load(Ordering::Relaxed);
    style(format!("{:<l$x}", id, l = len)).for_stderr().fg(color)
}

// Calculate the number of hex digits needed to represent `n`.
fn num_hex_digits(n: u32) -> usize {
    (1 + n.checked_ilog2().unwrap_or_default() / 4) as usize
}
