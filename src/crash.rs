//! src/crash.rs
//! Crash-report forwarding for error-level diagnostics.

/// ANSI-colored `[ERROR]` tag the default formatter convention places at the
/// front of rendered error-level messages.
///
/// Formatter implementations that want their error output recognized by the
/// crash-forwarding path should emit exactly this marker (or the bare
/// `[ERROR]` text) as the first thing in the rendered string.
pub const ERROR_MARKER: &str = "\x1b[031;1m[ERROR]\x1b[031;0m";

const PLAIN_MARKER: &str = "[ERROR]";

/// External error-tracking client that receives formatted error-level
/// messages for alerting and triage.
///
/// Forwarding is fire-and-forget: the method returns nothing, and any
/// transport failure stays inside the implementation. This crate never
/// configures the underlying client; hosts wire up their own (Sentry or
/// otherwise) and register it via
/// [`set_crash_reporter`](crate::set_crash_reporter).
pub trait CrashReporter: Send + Sync {
    /// Records one formatted error-level message.
    fn capture_message(&self, message: &str);
}

/// Strips one leading error marker from a rendered message.
///
/// Accepts both the colored [`ERROR_MARKER`] and the bare `[ERROR]` tag;
/// input carrying neither is returned unchanged. Crash-report forwarding
/// runs every message through this before prepending the configured name
/// prefix, so reporters see `prefix + body` rather than the terminal
/// coloring.
///
/// # Examples
///
/// ```
/// use driver_logging::{strip_error_marker, ERROR_MARKER};
///
/// let rendered = format!("{ERROR_MARKER}disk full");
/// assert_eq!(strip_error_marker(&rendered), "disk full");
/// assert_eq!(strip_error_marker("[ERROR]disk full"), "disk full");
/// assert_eq!(strip_error_marker("disk full"), "disk full");
/// ```
#[must_use]
pub fn strip_error_marker(rendered: &str) -> &str {
    if let Some(body) = rendered.strip_prefix(ERROR_MARKER) {
        return body;
    }
    rendered.strip_prefix(PLAIN_MARKER).unwrap_or(rendered)
}
