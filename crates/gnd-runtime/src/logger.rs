//! The process-wide logging sink (§6, Log output format).
//!
//! Every record is written as `[<LEVEL>]: <message>` to the process's
//! error channel, prefixed by two spaces per active call depth. This is a
//! custom [`log::Log`] backend rather than `env_logger` so the depth
//! prefix and bracketed level format are under our control.

use log::{Level, Log, Metadata, Record};
use std::cell::Cell;

struct GndLogger;

static LOGGER: GndLogger = GndLogger;

impl Log for GndLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "{}[{}]: {}",
            indent_prefix(),
            level_label(record.level()),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug | Level::Trace => "DEBUG",
    }
}

/// Installs the logging sink at the given maximum level.
///
/// Safe to call more than once; only the first call takes effect, matching
/// the "initialize-once at startup" policy for process-wide state.
pub fn init(level: log::LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

thread_local! {
    static DEPTH: Cell<usize> = Cell::new(0);
}

/// Two spaces per active call depth, for prefixing a log line.
pub fn indent_prefix() -> String {
    DEPTH.with(|d| "  ".repeat(d.get()))
}

/// An RAII guard that increments the call-depth counter for its lifetime.
///
/// Held by the interpreter while executing a subroutine body so nested
/// calls indent their debug logging one level deeper.
pub struct DepthGuard;

impl DepthGuard {
    pub fn enter() -> Self {
        DEPTH.with(|d| d.set(d.get() + 1));
        DepthGuard
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_prefix_grows_and_shrinks_with_guards() {
        assert_eq!(indent_prefix(), "");
        {
            let _g1 = DepthGuard::enter();
            assert_eq!(indent_prefix(), "  ");
            {
                let _g2 = DepthGuard::enter();
                assert_eq!(indent_prefix(), "    ");
            }
            assert_eq!(indent_prefix(), "  ");
        }
        assert_eq!(indent_prefix(), "");
    }
}
