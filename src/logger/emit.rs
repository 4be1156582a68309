use std::fmt;
use std::io::{self, Write};

use super::{ConfigState, Logger};
use crate::crash::strip_error_marker;
use crate::levels::Level;

/// Maximum character count of a rendered debug message; longer messages are
/// dropped whole, never truncated.
pub const MAX_DEBUG_OUTPUT: usize = 256;

/// Call depth handed to the formatter, reflecting the facade's internal
/// nesting between the public entry points and the rendering hook.
pub const FORMATTER_CALL_DEPTH: usize = 4;

/// Call depth handed to [`LogSink::write`](crate::LogSink::write).
pub const SINK_CALL_DEPTH: usize = 2;

/// Category routing error-channel messages through the sink factory.
pub const ERROR_CATEGORY: &str = "error";

const DEFAULT_CATEGORY: &str = "";

impl Logger {
    /// Emits an info-level message.
    pub fn log(&self, message: &str) {
        let state = self.read();
        if state.threshold > Level::Info {
            return;
        }
        state.write_record(Level::Info, DEFAULT_CATEGORY, message);
    }

    /// Emits an info-level message with a trailing newline appended to the
    /// body before formatting.
    pub fn logln(&self, message: &str) {
        let state = self.read();
        if state.threshold > Level::Info {
            return;
        }
        state.write_record(Level::Info, DEFAULT_CATEGORY, &format!("{message}\n"));
    }

    /// Emits a formatted info-level message; see also [`logf!`](crate::logf!).
    pub fn logf(&self, args: fmt::Arguments<'_>) {
        let state = self.read();
        if state.threshold > Level::Info {
            return;
        }
        state.write_record(Level::Info, DEFAULT_CATEGORY, &args.to_string());
    }

    /// Emits a debug-level message.
    ///
    /// Requires the gate opened by [`set_debug`](Self::set_debug) and drops
    /// messages longer than [`MAX_DEBUG_OUTPUT`] characters.
    pub fn debug(&self, message: &str) {
        let state = self.read();
        if !state.debug_enabled || state.threshold > Level::Debug {
            return;
        }
        if message.chars().count() <= MAX_DEBUG_OUTPUT {
            state.write_record(Level::Debug, DEFAULT_CATEGORY, message);
        }
    }

    /// Emits a debug-level message with a trailing newline appended to the
    /// body; the newline counts against the [`MAX_DEBUG_OUTPUT`] cap.
    pub fn debugln(&self, message: &str) {
        let state = self.read();
        if !state.debug_enabled || state.threshold > Level::Debug {
            return;
        }
        let line = format!("{message}\n");
        if line.chars().count() <= MAX_DEBUG_OUTPUT {
            state.write_record(Level::Debug, DEFAULT_CATEGORY, &line);
        }
    }

    /// Emits a formatted debug-level message; see also
    /// [`debugf!`](crate::debugf!).
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        let state = self.read();
        if !state.debug_enabled || state.threshold > Level::Debug {
            return;
        }
        let rendered = args.to_string();
        if rendered.chars().count() <= MAX_DEBUG_OUTPUT {
            state.write_record(Level::Debug, DEFAULT_CATEGORY, &rendered);
        }
    }

    /// Emits an error-level message with a trailing newline appended to the
    /// body. Never suppressed by the threshold.
    pub fn errorln(&self, message: &str) {
        let state = self.read();
        state.write_record(Level::Error, ERROR_CATEGORY, &format!("{message}\n"));
    }

    /// Emits a formatted error-level message; see also
    /// [`errorf!`](crate::errorf!). Never suppressed by the threshold.
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        let state = self.read();
        state.write_record(Level::Error, ERROR_CATEGORY, &args.to_string());
    }
}

impl ConfigState {
    /// Shared tail of every emitter: format, forward, resolve, write.
    ///
    /// Sink write failures are discarded; logging never throws back into the
    /// caller's control flow.
    fn write_record(&self, level: Level, category: &str, message: &str) {
        let Some(formatter) = self.formatter.as_ref() else {
            // Degraded mode: no formatter means no sink routing and no crash
            // forwarding, just the raw message on stdout.
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{message}");
            return;
        };
        let rendered = formatter(level, FORMATTER_CALL_DEPTH, message);

        if level >= Level::Error && self.crash_reporting {
            if let Some(reporter) = self.crash_reporter.as_ref() {
                let body = strip_error_marker(&rendered);
                reporter.capture_message(&format!("{}{}", self.prefix, body));
            }
        }

        match self.resolve_sink(category) {
            Some(sink) => {
                let _ = sink.write(SINK_CALL_DEPTH, &rendered);
            }
            None => {
                let mut stdout = io::stdout().lock();
                let _ = writeln!(stdout, "{rendered}");
            }
        }
    }
}
