//! Tracing subscriber setup for the binary.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Where logs may be written when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Line-oriented front-end: stderr is free to use.
    Stderr,
    /// Full-screen front-end: only a configured file may receive logs.
    FileOnly,
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter.
///
/// Returns whether this call installed the subscriber. `Ok(false)` means
/// nothing was requested (full-screen UI without a log file) or another
/// global subscriber was already set and is left in place.
pub fn init(config: &LogConfig, target: LogTarget) -> io::Result<bool> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match (&config.file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let installed = fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            Ok(installed.is_ok())
        }
        (None, LogTarget::Stderr) => {
            let installed = fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(io::stderr)
                .try_init();
            Ok(installed.is_ok())
        }
        (None, LogTarget::FileOnly) => Ok(false),
    }
}
