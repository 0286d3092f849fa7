//! Minimal stderr logger.
//!
//! The level comes from `OPGRID_LOG` (`off`, `error`, `warn`, `info`,
//! `debug` or `trace`) and defaults to `warn`.

use log::{LevelFilter, Log, Metadata, Record};

const ENV_VAR: &str = "OPGRID_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Calling it twice keeps the first installation.
pub fn init() {
    let level = level_from(std::env::var(ENV_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}
