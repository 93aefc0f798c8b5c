#![cfg(feature = "std")]

use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Writes this crate's records to stderr so they never interleave with the
/// board on stdout. Records from other crates are dropped.
struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn accepts(target: &str) -> bool {
        target == "seabattle" || target.starts_with("seabattle::") || target == "sim"
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && Self::accepts(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let module = target.strip_prefix("seabattle::").unwrap_or(target);
        eprintln!("[{:<5} {}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {}
}

/// Level named by `SEABATTLE_LOG` (`off`, `error`, ... `trace`); `warn` when
/// unset or unreadable.
fn level_from_env() -> LevelFilter {
    env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Calling it again is a no-op.
pub fn init_logging() {
    let level = level_from_env();
    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
