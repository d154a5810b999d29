// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::fmt;
use log::Record;
use std::io;
use std::time::SystemTime;

#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn write(&self, timestamp: SystemTime, record: &Record) -> io::Result<()> {
        fmt::format(timestamp, record, io::stderr().lock())
    }
}
