//! src/logger/mod.rs
//! Process-wide logger state and the sanctioned global instance.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::crash::CrashReporter;
use crate::levels::Level;
use crate::sink::{LogSink, SinkFactory};

mod configure;
mod emit;

pub use emit::{ERROR_CATEGORY, FORMATTER_CALL_DEPTH, MAX_DEBUG_OUTPUT, SINK_CALL_DEPTH};

/// Rendering hook applied to every message that reaches the write path.
///
/// Receives the message severity, the fixed call depth of the facade's
/// internal nesting (for computing caller-location metadata), and the
/// rendered message body. Returns the final string handed to the sink and,
/// for error-level messages, to the crash reporter.
pub type FormatFn = Box<dyn Fn(Level, usize, &str) -> String + Send + Sync>;

/// Everything the emitters read and the configuration calls mutate.
///
/// Defaults are inert: threshold at [`Level::Debug`], debug gate closed, no
/// prefix, crash forwarding off, and no sink, factory, formatter, or
/// reporter. With nothing configured every emitted message degrades to a
/// plain line on standard output.
struct ConfigState {
    threshold: Level,
    debug_enabled: bool,
    prefix: String,
    crash_reporting: bool,
    sink: Option<Arc<dyn LogSink>>,
    sink_factory: Option<SinkFactory>,
    formatter: Option<FormatFn>,
    crash_reporter: Option<Arc<dyn CrashReporter>>,
}

impl ConfigState {
    const fn new() -> Self {
        Self {
            threshold: Level::Debug,
            debug_enabled: false,
            prefix: String::new(),
            crash_reporting: false,
            sink: None,
            sink_factory: None,
            formatter: None,
            crash_reporter: None,
        }
    }

    /// Explicit sink wins for every category; otherwise a non-empty category
    /// consults the factory; otherwise the caller falls back to stdout.
    fn resolve_sink(&self, category: &str) -> Option<Arc<dyn LogSink>> {
        if let Some(sink) = &self.sink {
            return Some(Arc::clone(sink));
        }
        if !category.is_empty() {
            if let Some(factory) = &self.sink_factory {
                return Some(factory(category));
            }
        }
        None
    }
}

/// Leveled logging facade over one long-lived configuration object.
///
/// A `Logger` can be constructed and passed around explicitly (dependency
/// injection, tests), but the common deployment is the process-wide instance
/// behind [`global`], configured once at startup through the free functions
/// at the crate root and read by every thread thereafter.
///
/// Configuration lives behind an [`RwLock`]: emission takes a read lock,
/// configuration calls take the write lock. Lock poisoning is absorbed so a
/// panicking caller can never disable logging for the rest of the process.
pub struct Logger {
    state: RwLock<ConfigState>,
}

impl Logger {
    /// Creates an unconfigured logger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: RwLock::new(ConfigState::new()),
        }
    }

    /// Current severity threshold.
    #[must_use]
    pub fn threshold(&self) -> Level {
        self.read().threshold
    }

    /// Whether the secondary debug gate is open.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.read().debug_enabled
    }

    /// Reports whether a message at `level` would currently be emitted.
    ///
    /// Error and fatal severities always pass; debug additionally requires
    /// the gate opened by [`set_debug`](Self::set_debug). The 256-character
    /// debug output cap is applied per message and is not reflected here.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        let state = self.read();
        match level {
            Level::Error | Level::Fatal => true,
            Level::Debug => state.debug_enabled && state.threshold <= Level::Debug,
            Level::Info | Level::Warn => state.threshold <= level,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ConfigState> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigState> {
        self.state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("Logger")
            .field("threshold", &state.threshold)
            .field("debug_enabled", &state.debug_enabled)
            .field("prefix", &state.prefix)
            .field("crash_reporting", &state.crash_reporting)
            .field("has_sink", &state.sink.is_some())
            .field("has_sink_factory", &state.sink_factory.is_some())
            .field("has_formatter", &state.formatter.is_some())
            .field("has_crash_reporter", &state.crash_reporter.is_some())
            .finish()
    }
}

static LOGGER: Logger = Logger::new();

/// The process-wide logger the crate-root free functions delegate to.
#[must_use]
pub fn global() -> &'static Logger {
    &LOGGER
}
