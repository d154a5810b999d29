// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Send one log line to a log collector and exit.

use anyhow::{Context, Error};
use argh::FromArgs;
use log::{debug, warn, LevelFilter};
use logsend::{Destination, Level, LogRecord, LogSender};
use std::path::Path;
use std::process;

/// Options taking a value. Must match the `option` fields of `Args`.
const VALUE_OPTIONS: &[&str] = &["-l", "--log-level"];
/// Flags without a value. Must match the `switch` fields of `Args` and the help triggers.
const SWITCHES: &[&str] = &["-c", "--canonical", "-h", "--help"];

#[derive(FromArgs, Debug)]
#[argh(help_triggers("-h", "--help"))]
#[argh(example = "logsend ERROR 'Database connection failed'")]
#[argh(example = "logsend INFO 'service started' 10.0.0.7 5140")]
/// Send a single `[severity] message` line over TCP
struct Args {
    #[argh(positional, description = "severity label, e.g. INFO or ERROR")]
    severity: String,

    #[argh(positional, description = "message text")]
    message: String,

    #[argh(
        positional,
        arg_name = "host port",
        description = "destination host and port (default: localhost 8080)"
    )]
    destination: Vec<String>,

    #[argh(description = "send the canonical level name instead of the given severity")]
    #[argh(switch, short = 'c')]
    canonical: bool,

    #[argh(description = "log level of diagnostics (default: warn)")]
    #[argh(option, short = 'l')]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<(), Error> {
    let Args {
        severity,
        message,
        destination,
        canonical,
        log_level,
    } = parse_args();

    // Initialize logging
    logsend_logger::init(log_level.unwrap_or(LevelFilter::Warn));

    if destination.len() > 2 {
        warn!("Ignoring extra arguments {:?}", &destination[2..]);
    }
    let host = destination.first().map(String::as_str);
    let port = destination.get(1).map(String::as_str);
    let destination = Destination::from_args(host, port)?;

    let severity = if canonical {
        let level = Level::classify(&severity);
        debug!("Classified severity {severity:?} as {level}");
        level.to_string()
    } else {
        severity
    };
    let record = LogRecord::new(severity, message);

    LogSender::new(destination)
        .send_record(&record)
        .context("failed to send log record")?;

    println!("Sent: {record}");
    Ok(())
}

/// Parse the command line. Exits on help, usage errors and arguments that are not UTF-8.
fn parse_args() -> Args {
    let mut args = std::env::args_os().map(|arg| {
        arg.into_string().unwrap_or_else(|arg| {
            eprintln!("Invalid utf8: {}", arg.to_string_lossy());
            process::exit(1)
        })
    });
    let program = args.next().unwrap_or_default();
    let command = Path::new(&program)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("logsend");
    let args: Vec<String> = args.collect();

    match Args::from_args(&[command], &end_options(&args)) {
        Ok(args) => args,
        Err(early_exit) => match early_exit.status {
            Ok(()) => {
                println!("{}", early_exit.output);
                process::exit(0)
            }
            Err(()) => {
                eprintln!(
                    "{}\nRun {command} --help for more information.",
                    early_exit.output
                );
                process::exit(1)
            }
        },
    }
}

/// Insert `--` before the first positional argument.
///
/// Severity and message are free-form. Values like `-`, `-5 degrees` or `help` are
/// taken verbatim instead of being parsed as flags.
fn end_options(args: &[String]) -> Vec<&str> {
    let mut options = Vec::with_capacity(args.len() + 1);
    let mut i = 0;
    while let Some(arg) = args.get(i).map(String::as_str) {
        if VALUE_OPTIONS.contains(&arg) {
            options.extend(args[i..].iter().take(2).map(String::as_str));
            i += 2;
        } else if SWITCHES.contains(&arg) {
            options.push(arg);
            i += 1;
        } else {
            if arg == "--" {
                i += 1;
            }
            break;
        }
    }
    options.push("--");
    options.extend(args.iter().skip(i).map(String::as_str));
    options
}

#[cfg(test)]
mod test {
    use super::{end_options, Args};
    use argh::FromArgs;
    use log::LevelFilter;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        Args::from_args(&["logsend"], &end_options(&args))
    }

    #[test]
    fn severity_and_message_only() {
        let args = parse(&["INFO", "hello"]).unwrap();
        assert_eq!(args.severity, "INFO");
        assert_eq!(args.message, "hello");
        assert!(args.destination.is_empty());
        assert!(!args.canonical);
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn host_and_port() {
        let args = parse(&["INFO", "hello", "10.0.0.7"]).unwrap();
        assert_eq!(args.destination, ["10.0.0.7"]);

        let args = parse(&["INFO", "hello", "10.0.0.7", "5140"]).unwrap();
        assert_eq!(args.destination, ["10.0.0.7", "5140"]);
    }

    #[test]
    fn options_before_positionals() {
        let args = parse(&["-c", "-l", "debug", "err", "disk failure"]).unwrap();
        assert!(args.canonical);
        assert_eq!(args.log_level, Some(LevelFilter::Debug));
        assert_eq!(args.severity, "err");
        assert_eq!(args.message, "disk failure");
    }

    #[test]
    fn dash_values_are_positional() {
        let args = parse(&["-", "-5 degrees outside"]).unwrap();
        assert_eq!(args.severity, "-");
        assert_eq!(args.message, "-5 degrees outside");

        let args = parse(&["WARN", "--canonical", "-h"]).unwrap();
        assert_eq!(args.message, "--canonical");
        assert_eq!(args.destination, ["-h"]);
        assert!(!args.canonical);
    }

    #[test]
    fn help_is_a_valid_severity() {
        let args = parse(&["help", "need assistance"]).unwrap();
        assert_eq!(args.severity, "help");
        assert_eq!(args.message, "need assistance");
    }

    #[test]
    fn explicit_separator() {
        let args = parse(&["-c", "--", "-c", "msg"]).unwrap();
        assert!(args.canonical);
        assert_eq!(args.severity, "-c");
        assert_eq!(args.message, "msg");
    }

    #[test]
    fn empty_strings() {
        let args = parse(&["", ""]).unwrap();
        assert_eq!(args.severity, "");
        assert_eq!(args.message, "");
    }

    #[test]
    fn missing_positionals() {
        let early_exit = parse(&["INFO"]).unwrap_err();
        assert_eq!(early_exit.status, Err(()));

        let early_exit = parse(&[]).unwrap_err();
        assert_eq!(early_exit.status, Err(()));
    }

    #[test]
    fn help_flag() {
        let early_exit = parse(&["--help"]).unwrap_err();
        assert_eq!(early_exit.status, Ok(()));
        assert!(early_exit.output.contains("severity"));
    }
}
