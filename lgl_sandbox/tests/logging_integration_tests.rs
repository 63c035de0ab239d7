//! Integration tests for the logging system
//!
//! Verifies that sandbox operations report through the global logger.
//!
//! Run with: cargo test --test logging_integration_tests

use lgl_sandbox::lgl::camera::Camera;
use lgl_sandbox::lgl::image::ImageReader;
use lgl_sandbox::lgl::log::{reset_logger, set_logger, LogEntry, LogSeverity, Logger};
use lgl_sandbox::lgl::SandboxConfig;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Captured entries from one source
fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger_receives_macros() {
    let (logger, entries) = TestLogger::new();
    set_logger(logger);

    lgl_sandbox::lgl_info!("test::module", "Test info {}", 1);
    lgl_sandbox::lgl_warn!("test::module", "Test warning");
    lgl_sandbox::lgl_error!("test::module", "Test error");

    let captured = from_source(&entries, "test::module");
    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Test info 1");
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    assert!(captured[1].file.is_none());
    assert_eq!(captured[2].severity, LogSeverity::Error);
    assert!(captured[2].file.is_some());
    assert!(captured[2].line.is_some());

    reset_logger();
}

#[test]
#[serial]
fn test_integration_missing_image_logs_error() {
    let (logger, entries) = TestLogger::new();
    set_logger(logger);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.jpg");
    assert!(ImageReader::read_image(&path).is_err());

    let captured = from_source(&entries, "lgl::ImageReader");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert!(captured[0].message.contains("missing.jpg"));

    reset_logger();
}

#[test]
#[serial]
fn test_integration_missing_config_logs_error() {
    let (logger, entries) = TestLogger::new();
    set_logger(logger);

    let dir = tempfile::tempdir().unwrap();
    assert!(SandboxConfig::load(&dir.path().join("sandbox.toml")).is_err());

    let captured = from_source(&entries, "lgl::Utils");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);

    reset_logger();
}

#[test]
#[serial]
fn test_integration_invalid_aspect_ratio_warns() {
    let (logger, entries) = TestLogger::new();
    set_logger(logger);

    let mut camera = Camera::default();
    camera.set_aspect_ratio(-1.0);

    let captured = from_source(&entries, "lgl::Camera");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Warn);

    reset_logger();
}
