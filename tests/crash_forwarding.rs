//! Integration tests for crash-report forwarding.
//!
//! Error-level messages are forwarded to the registered reporter only when
//! crash reporting is enabled AND a formatter is configured AND a reporter
//! is present. Forwarded messages carry the configured prefix with the
//! leading error marker stripped from the rendered string.

mod common;

use common::{MemorySink, RecordingReporter, passthrough_formatter};
use driver_logging::{ERROR_MARKER, Level, Logger};

fn marker_formatter() -> driver_logging::FormatFn {
    Box::new(|level, _depth, body| {
        if level >= Level::Error {
            format!("[ERROR]{body}")
        } else {
            body.to_string()
        }
    })
}

// ============================================================================
// Forwarding
// ============================================================================

/// Verifies the forwarded message is prefix + marker-stripped body.
#[test]
fn forwards_prefix_plus_stripped_body() {
    let logger = Logger::new();
    logger.set_logger_func(
        "mydb: ".to_string(),
        true,
        Level::Error,
        None,
        Some(marker_formatter()),
    );
    let reporter = RecordingReporter::shared();
    logger.set_crash_reporter(reporter.clone());
    let sink = MemorySink::shared();
    logger.set_logger(sink.clone());

    logger.errorln("boom");

    assert_eq!(reporter.captured(), ["mydb: boom\n"]);
    // The sink still receives the marker.
    assert_eq!(sink.messages(), ["[ERROR]boom\n"]);
}

/// Verifies the colored marker variant is stripped too.
#[test]
fn strips_the_colored_marker() {
    let logger = Logger::new();
    logger.set_logger_func(
        "mydb: ".to_string(),
        true,
        Level::Error,
        None,
        Some(Box::new(|_level, _depth, body| format!("{ERROR_MARKER}{body}"))),
    );
    let reporter = RecordingReporter::shared();
    logger.set_crash_reporter(reporter.clone());
    logger.set_logger(MemorySink::shared());

    logger.errorf(format_args!("lost quorum"));

    assert_eq!(reporter.captured(), ["mydb: lost quorum"]);
}

/// Verifies unmarked formatter output is forwarded unchanged after the prefix.
#[test]
fn unmarked_output_is_forwarded_intact() {
    let logger = Logger::new();
    logger.set_logger_func(
        "pfx/".to_string(),
        true,
        Level::Error,
        None,
        Some(passthrough_formatter()),
    );
    let reporter = RecordingReporter::shared();
    logger.set_crash_reporter(reporter.clone());
    logger.set_logger(MemorySink::shared());

    logger.errorln("no marker here");

    assert_eq!(reporter.captured(), ["pfx/no marker here\n"]);
}

/// Verifies forwarding survives a threshold that would silence info output.
#[test]
fn forwarding_ignores_the_threshold() {
    let logger = Logger::new();
    logger.set_logger_func(
        String::new(),
        true,
        Level::Fatal,
        None,
        Some(marker_formatter()),
    );
    let reporter = RecordingReporter::shared();
    logger.set_crash_reporter(reporter.clone());
    logger.set_logger(MemorySink::shared());

    logger.errorln("still forwarded");

    assert_eq!(reporter.captured().len(), 1);
}

// ============================================================================
// Suppression
// ============================================================================

/// Verifies no forwarding happens while crash reporting is disabled.
#[test]
fn disabled_reporting_never_forwards() {
    let logger = Logger::new();
    logger.set_logger_func(
        "mydb: ".to_string(),
        false,
        Level::Error,
        None,
        Some(marker_formatter()),
    );
    let reporter = RecordingReporter::shared();
    logger.set_crash_reporter(reporter.clone());
    logger.set_logger(MemorySink::shared());

    logger.errorln("boom");

    assert!(reporter.captured().is_empty());
}

/// Verifies a missing formatter disables forwarding even when enabled.
#[test]
fn missing_formatter_disables_forwarding() {
    let logger = Logger::new();
    logger.set_logger_func("mydb: ".to_string(), true, Level::Error, None, None);
    let reporter = RecordingReporter::shared();
    logger.set_crash_reporter(reporter.clone());

    logger.errorln("boom");

    assert!(reporter.captured().is_empty());
}

/// Verifies info-level messages are never forwarded.
#[test]
fn info_is_never_forwarded() {
    let logger = Logger::new();
    logger.set_logger_func(
        String::new(),
        true,
        Level::Debug,
        None,
        Some(marker_formatter()),
    );
    let reporter = RecordingReporter::shared();
    logger.set_crash_reporter(reporter.clone());
    logger.set_logger(MemorySink::shared());

    logger.log("routine");
    logger.logln("routine");

    assert!(reporter.captured().is_empty());
}

/// Verifies enabling reporting without a registered reporter is harmless.
#[test]
fn missing_reporter_is_harmless() {
    let logger = Logger::new();
    logger.set_logger_func(
        String::new(),
        true,
        Level::Error,
        None,
        Some(marker_formatter()),
    );
    let sink = MemorySink::shared();
    logger.set_logger(sink.clone());

    logger.errorln("boom");

    assert_eq!(sink.messages().len(), 1);
}
