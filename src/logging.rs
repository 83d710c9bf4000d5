#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

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

/// Name of the environment variable holding the log level.
pub const LOG_ENV: &str = "TICTACTOE_LOG";

/// Install the stderr logger at the level named by `TICTACTOE_LOG`
/// (`error`..`trace`, case-insensitive), or `info` when unset or unparsable.
///
/// The board and prompts own stdout, so log lines go to stderr where they can
/// be redirected without garbling the grid. Calling this twice is a no-op.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
