//! src/backtrace.rs
//! Worker-crash diagnostics: stack capture, stderr dump, error-channel echo.

use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::sync::Once;

use crate::logger::{Logger, global};

impl Logger {
    /// Reports the abnormal exit of a named unit of concurrent work.
    ///
    /// Emits an error-level line naming the worker, captures the current
    /// stack trace, writes the trace directly to standard error (bypassing
    /// all gating and sinks, so the dump survives a completely unconfigured
    /// or misconfigured logger), and then emits the same trace through the
    /// error channel so a configured sink and crash reporter receive it too.
    ///
    /// Intended to be called from the recovery path of a worker thread or
    /// task, e.g. a `catch_unwind` handler; see [`install_panic_hook`] for
    /// the hands-off variant.
    pub fn report_crash(&self, name: &str) {
        self.errorln(&format!("worker [{name}] is exiting"));

        // force_capture: the dump must happen even without RUST_BACKTRACE.
        let trace = Backtrace::force_capture().to_string();
        {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "{trace}");
        }
        self.errorln(&trace);
    }
}

/// [`Logger::report_crash`] on the global logger.
pub fn report_crash(name: &str) {
    global().report_crash(name);
}

/// Routes panics through [`report_crash`] on the global logger.
///
/// Chains ahead of the previously installed panic hook, which still runs
/// afterwards; the panicking thread's name (or `"unnamed"`) identifies the
/// worker. Installing more than once is a no-op.
///
/// # Examples
///
/// ```
/// driver_logging::install_panic_hook();
/// driver_logging::install_panic_hook(); // second call changes nothing
/// ```
pub fn install_panic_hook() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            report_crash(thread.name().unwrap_or("unnamed"));
            previous(info);
        }));
    });
}
