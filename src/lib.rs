#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `driver-logging` is the process-wide logging facade of a database driver:
//! level-filtered emission, pluggable sink delegation, optional forwarding of
//! error-level messages to an external crash reporter, and a worker-crash
//! diagnostic that captures and reports stack traces. The driver machinery
//! itself (wire protocol, query execution, connection pooling) lives
//! elsewhere and merely calls into this crate.
//!
//! # Design
//!
//! One long-lived [`Logger`] holds the whole configuration behind an
//! `RwLock`; the crate-root free functions operate on the sanctioned global
//! instance returned by [`global`]. Emission is synchronous and bounded:
//! gate on the severity threshold, render through the optional formatter,
//! conditionally forward to the [`CrashReporter`], resolve a [`LogSink`]
//! (explicit override, else category-keyed factory, else standard output
//! with a trailing newline), write. The error channel is never silenced by
//! the threshold; debug output is additionally gated by [`set_debug`] and a
//! [`MAX_DEBUG_OUTPUT`]-character cap on the rendered message.
//!
//! # Invariants
//!
//! - A message at level `L` reaches the write path iff `L >= threshold`,
//!   except error-channel messages, which always do.
//! - Configuration is safe to mutate at any time from any thread, though the
//!   intended contract is configure-once-at-startup, read-everywhere-after.
//! - No emitter returns an error or panics: sink write failures are
//!   swallowed, crash-forwarding is fire-and-forget, and a missing
//!   formatter or sink degrades to plain standard-output printing.
//!
//! # Errors
//!
//! The only user-visible error type is [`ParseLevelError`], returned when
//! parsing a level name. Sinks surface [`std::io::Error`] to the facade,
//! which discards it.
//!
//! # Examples
//!
//! An injected logger instance with an in-memory sink:
//!
//! ```
//! use driver_logging::{Level, LogSink, Logger};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Default)]
//! struct Memory(Mutex<Vec<String>>);
//!
//! impl LogSink for Memory {
//!     fn write(&self, _call_depth: usize, message: &str) -> std::io::Result<()> {
//!         self.0.lock().unwrap().push(message.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let logger = Logger::new();
//! logger.set_logger_func(
//!     "driver: ".to_string(),
//!     false,
//!     Level::Info,
//!     None,
//!     Some(Box::new(|level, _depth, body| format!("[{level}] {body}"))),
//! );
//! let sink = Arc::new(Memory::default());
//! logger.set_logger(sink.clone());
//!
//! logger.logln("connected");
//! logger.debug("suppressed: the debug gate is closed");
//!
//! let lines = sink.0.lock().unwrap();
//! assert_eq!(lines.as_slice(), ["[info] connected\n"]);
//! ```
//!
//! The global facade, as a host application configures it at startup:
//!
//! ```
//! use driver_logging::Level;
//!
//! driver_logging::set_logger_func(
//!     "myapp: ".to_string(),
//!     false,
//!     Level::Info,
//!     None,
//!     Some(Box::new(|level, _depth, body| format!("[{level}] {body}"))),
//! );
//!
//! driver_logging::logf!("replica set has {} members", 3);
//! driver_logging::errorln("primary stepped down");
//! ```

mod backtrace;
mod crash;
mod levels;
mod logger;
mod macros;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use backtrace::{install_panic_hook, report_crash};
pub use crash::{CrashReporter, ERROR_MARKER, strip_error_marker};
pub use levels::{Level, ParseLevelError};
pub use logger::{
    ERROR_CATEGORY, FORMATTER_CALL_DEPTH, FormatFn, Logger, MAX_DEBUG_OUTPUT, SINK_CALL_DEPTH,
    global,
};
pub use sink::{LineMode, LogSink, SinkFactory, WriterSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingSink;

use std::fmt;
use std::sync::Arc;

/// [`Logger::set_logger`] on the global logger.
pub fn set_logger(sink: Arc<dyn LogSink>) {
    global().set_logger(sink);
}

/// [`Logger::clear_logger`] on the global logger.
pub fn clear_logger() {
    global().clear_logger();
}

/// [`Logger::set_logger_func`] on the global logger.
pub fn set_logger_func(
    prefix: String,
    crash_reporting: bool,
    threshold: Level,
    sink_factory: Option<SinkFactory>,
    formatter: Option<FormatFn>,
) {
    global().set_logger_func(prefix, crash_reporting, threshold, sink_factory, formatter);
}

/// [`Logger::set_debug`] on the global logger.
pub fn set_debug(enabled: bool) {
    global().set_debug(enabled);
}

/// [`Logger::set_crash_reporter`] on the global logger.
pub fn set_crash_reporter(reporter: Arc<dyn CrashReporter>) {
    global().set_crash_reporter(reporter);
}

/// [`Logger::log`] on the global logger.
pub fn log(message: &str) {
    global().log(message);
}

/// [`Logger::logln`] on the global logger.
pub fn logln(message: &str) {
    global().logln(message);
}

/// [`Logger::logf`] on the global logger; usually spelled [`logf!`].
pub fn logf(args: fmt::Arguments<'_>) {
    global().logf(args);
}

/// [`Logger::debug`] on the global logger.
pub fn debug(message: &str) {
    global().debug(message);
}

/// [`Logger::debugln`] on the global logger.
pub fn debugln(message: &str) {
    global().debugln(message);
}

/// [`Logger::debugf`] on the global logger; usually spelled [`debugf!`].
pub fn debugf(args: fmt::Arguments<'_>) {
    global().debugf(args);
}

/// [`Logger::errorln`] on the global logger.
pub fn errorln(message: &str) {
    global().errorln(message);
}

/// [`Logger::errorf`] on the global logger; usually spelled [`errorf!`].
pub fn errorf(args: fmt::Arguments<'_>) {
    global().errorf(args);
}
