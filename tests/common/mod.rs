//! Shared fixtures for the integration suite.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use driver_logging::{CrashReporter, FormatFn, Level, LogSink};

/// Sink recording every rendered message in memory.
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink lock").clone()
    }
}

impl LogSink for MemorySink {
    fn write(&self, _call_depth: usize, message: &str) -> io::Result<()> {
        self.messages
            .lock()
            .expect("sink lock")
            .push(message.to_string());
        Ok(())
    }
}

/// Sink whose writes always fail, for swallowed-error coverage.
pub struct FailingSink;

impl LogSink for FailingSink {
    fn write(&self, _call_depth: usize, _message: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is gone"))
    }
}

/// Crash reporter recording every forwarded message.
#[derive(Default)]
pub struct RecordingReporter {
    captured: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn captured(&self) -> Vec<String> {
        self.captured.lock().expect("reporter lock").clone()
    }
}

impl CrashReporter for RecordingReporter {
    fn capture_message(&self, message: &str) {
        self.captured
            .lock()
            .expect("reporter lock")
            .push(message.to_string());
    }
}

/// Formatter rendering `[LEVEL] body`, the shape most tests assert against.
pub fn tag_formatter() -> FormatFn {
    Box::new(|level: Level, _depth, body| {
        format!("[{}] {}", level.as_str().to_uppercase(), body)
    })
}

/// Formatter passing the body through unchanged.
pub fn passthrough_formatter() -> FormatFn {
    Box::new(|_level, _depth, body| body.to_string())
}
