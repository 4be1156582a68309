//! Format-string sugar for the global facade.
//!
//! The macros expand through [`format_args!`] into the corresponding
//! crate-root functions, so gating happens before any formatting cost is
//! paid beyond argument capture.

/// Emits a formatted info-level message through the global logger.
///
/// # Examples
///
/// ```
/// driver_logging::logf!("connected to {} in {}ms", "replica-2", 12);
/// ```
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::logf(::std::format_args!($($arg)*))
    };
}

/// Emits a formatted debug-level message through the global logger.
///
/// Subject to the debug gate and the rendered-length cap like
/// [`debug`](crate::debug).
///
/// # Examples
///
/// ```
/// driver_logging::set_debug(true);
/// driver_logging::debugf!("cursor batch of {} documents", 101);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::debugf(::std::format_args!($($arg)*))
    };
}

/// Emits a formatted error-level message through the global logger.
///
/// Never suppressed by the severity threshold.
///
/// # Examples
///
/// ```
/// driver_logging::errorf!("handshake with {} failed", "shard-0");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::errorf(::std::format_args!($($arg)*))
    };
}
