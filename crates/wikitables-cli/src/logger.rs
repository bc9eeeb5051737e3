//! Minimal stderr logger for the `log` facade

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

static LOGGER: StderrLogger = StderrLogger;
static START: OnceLock<Instant> = OnceLock::new();

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = START.get_or_init(Instant::now).elapsed().as_millis();
        let level = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "[{:>6}ms][{}] {}", elapsed, level, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the logger; warnings by default, everything down to debug with `debug`
pub fn init(debug: bool) {
    START.get_or_init(Instant::now);
    let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
    // a logger may already be set when embedded
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
