//! src/tracing_bridge.rs
//! Bridge between this facade and the `tracing` ecosystem.
//!
//! Host applications that already run a `tracing-subscriber` stack can
//! absorb driver diagnostics by registering [`TracingSink`]s instead of
//! file- or writer-backed sinks. A sink carries the `tracing` level its
//! messages are emitted at, chosen at construction, because the
//! [`LogSink`](crate::LogSink) wire does not carry severity; pairing one
//! sink per category through the sink factory recovers the split:
//!
//! ```
//! use driver_logging::{Level, TracingSink};
//! use std::sync::Arc;
//!
//! driver_logging::set_logger_func(
//!     String::new(),
//!     false,
//!     Level::Info,
//!     Some(Box::new(|category| {
//!         let level = if category == driver_logging::ERROR_CATEGORY {
//!             Level::Error
//!         } else {
//!             Level::Info
//!         };
//!         Arc::new(TracingSink::new(level))
//!     })),
//!     Some(Box::new(|_, _, body| body.to_string())),
//! );
//! ```

use std::io;

use crate::levels::Level;
use crate::sink::LogSink;

/// Forwards each written message to a `tracing` event.
///
/// Trailing newlines are trimmed before forwarding since `tracing` events
/// are line-oriented already; the call depth is ignored because caller
/// location comes from the subscriber's own metadata handling.
#[derive(Clone, Copy, Debug)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    /// Creates a sink emitting events at the given severity.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// Severity this sink emits at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl LogSink for TracingSink {
    fn write(&self, _call_depth: usize, message: &str) -> io::Result<()> {
        let message = message.trim_end_matches('\n');
        match self.level {
            Level::Debug => tracing::debug!(target: "driver_logging", "{message}"),
            Level::Info => tracing::info!(target: "driver_logging", "{message}"),
            Level::Warn => tracing::warn!(target: "driver_logging", "{message}"),
            Level::Error | Level::Fatal => {
                tracing::error!(target: "driver_logging", "{message}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_its_construction_level() {
        assert_eq!(TracingSink::new(Level::Warn).level(), Level::Warn);
    }

    #[test]
    fn write_never_fails() {
        let sink = TracingSink::new(Level::Info);
        assert!(sink.write(2, "no subscriber installed\n").is_ok());
    }
}
