#![cfg(feature = "std")]

use std::env;

use log::{LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level (`error`, `warn`, `info`,
/// `debug`, `trace` or `off`).
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Install the stderr logger with the level from `BATTLESHIP_LOG`, or
/// `default` if the variable is unset or invalid. Records go to stderr so
/// they never mix with the game transcript on stdout.
pub fn init_logging(default: LevelFilter) {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default);
    // A logger may already be installed (e.g. by a test harness).
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
