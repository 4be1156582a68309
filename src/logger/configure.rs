use std::sync::Arc;

use super::{FormatFn, Logger};
use crate::crash::CrashReporter;
use crate::levels::Level;
use crate::sink::{LogSink, SinkFactory};

impl Logger {
    /// Injects a fixed sink that overrides category-based resolution.
    ///
    /// While set, every emitted message goes to this sink regardless of
    /// channel; the factory configured via
    /// [`set_logger_func`](Self::set_logger_func) is ignored until
    /// [`clear_logger`](Self::clear_logger) removes the override.
    pub fn set_logger(&self, sink: Arc<dyn LogSink>) {
        self.write().sink = Some(sink);
    }

    /// Removes the fixed sink override, restoring factory resolution and the
    /// standard-output fallback.
    pub fn clear_logger(&self) {
        self.write().sink = None;
    }

    /// Full configuration in one call.
    ///
    /// * `prefix` - prepended to messages forwarded to the crash reporter.
    /// * `crash_reporting` - whether error-level messages are forwarded.
    /// * `threshold` - minimum severity for the info/debug channels.
    /// * `sink_factory` - category-keyed sink construction, consulted when no
    ///   fixed sink is set.
    /// * `formatter` - rendering hook; without one the write path degrades to
    ///   plain standard-output printing and crash forwarding is disabled.
    ///
    /// All five fields are replaced; passing `None` clears the corresponding
    /// hook.
    pub fn set_logger_func(
        &self,
        prefix: String,
        crash_reporting: bool,
        threshold: Level,
        sink_factory: Option<SinkFactory>,
        formatter: Option<FormatFn>,
    ) {
        let mut state = self.write();
        state.prefix = prefix;
        state.crash_reporting = crash_reporting;
        state.threshold = threshold;
        state.sink_factory = sink_factory;
        state.formatter = formatter;
    }

    /// Opens or closes the secondary debug gate.
    ///
    /// Debug messages are emitted only while the gate is open and the
    /// threshold does not exclude [`Level::Debug`].
    pub fn set_debug(&self, enabled: bool) {
        self.write().debug_enabled = enabled;
    }

    /// Registers the error-tracking client that receives forwarded
    /// error-level messages.
    ///
    /// Forwarding additionally requires `crash_reporting` to be enabled via
    /// [`set_logger_func`](Self::set_logger_func) and a formatter to be
    /// configured.
    pub fn set_crash_reporter(&self, reporter: Arc<dyn CrashReporter>) {
        self.write().crash_reporter = Some(reporter);
    }
}
