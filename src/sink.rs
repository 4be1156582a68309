//! src/sink.rs
//! Pluggable log destinations and the writer-backed reference implementation.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A destination capable of persisting or displaying a rendered log line.
///
/// Implementations receive the fully rendered message together with a call
/// depth: the number of stack frames a location-aware sink should skip when
/// attributing the message to its originating source line. Sinks that do not
/// resolve caller locations are free to ignore it.
///
/// Write failures are reported through the [`io::Result`] but the emitting
/// facade discards them; logging never propagates errors back into the
/// caller's control flow.
pub trait LogSink: Send + Sync {
    /// Writes one rendered message to the destination.
    fn write(&self, call_depth: usize, message: &str) -> io::Result<()>;
}

/// Category-keyed sink construction.
///
/// Invoked with the message category (`""` for the info/debug channel,
/// `"error"` for the error channel) when no explicit sink override is
/// configured, allowing error-level output to be routed to a distinct
/// destination such as a separate error log file.
pub type SinkFactory = Box<dyn Fn(&str) -> Arc<dyn LogSink> + Send + Sync>;

/// Controls whether a [`WriterSink`] appends a trailing newline per message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each message.
    WithNewline,
    /// Emit the message exactly as rendered.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether this mode appends a trailing newline.
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

/// [`LogSink`] backed by any [`io::Write`] implementor.
///
/// The writer sits behind a mutex so one sink handle can be shared by
/// concurrent callers through an [`Arc`]. Each write streams the rendered
/// message and then honours the configured [`LineMode`].
///
/// # Examples
///
/// Collect diagnostics into an in-memory buffer:
///
/// ```
/// use driver_logging::{LogSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write(2, "connection established")?;
/// sink.write(2, "handshake complete")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Emit a message without a trailing newline:
///
/// ```
/// use driver_logging::{LineMode, LogSink, WriterSink};
///
/// let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.write(2, "progress: 42%")?;
///
/// assert_eq!(sink.into_inner(), b"progress: 42%".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each message.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        // A poisoned mutex still holds a usable writer.
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send,
{
    fn write(&self, _call_depth: usize, message: &str) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(message.as_bytes())?;
        if self.line_mode.append_newline() {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_newlines_by_default() {
        let sink = WriterSink::new(Vec::new());
        sink.write(2, "first").expect("write succeeds");
        sink.write(2, "second").expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "first\nsecond\n");
    }

    #[test]
    fn without_newline_preserves_output() {
        let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write(2, "partial").expect("write succeeds");

        assert_eq!(sink.into_inner(), b"partial".to_vec());
    }

    #[test]
    fn line_mode_bool_conversions() {
        assert_eq!(LineMode::from(true), LineMode::WithNewline);
        assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
        assert!(bool::from(LineMode::WithNewline));
        assert!(!bool::from(LineMode::WithoutNewline));
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn call_depth_does_not_affect_output() {
        let sink = WriterSink::new(Vec::new());
        sink.write(0, "a").expect("write succeeds");
        sink.write(9, "b").expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "a\nb\n");
    }
}
