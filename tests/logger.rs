//! Integration tests for logger behavior.

use lms_grading::logger::{
    close_file_logging, init_file_logging, set_level, set_level_from_str, Level,
};
use lms_grading::{debug, error, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_messages() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("logs").join("lmsgrade.log");

    assert!(init_file_logging(&path));
    set_level(Level::Warn);
    warn!("stale grade for u0000001");
    close_file_logging();

    let written = fs::read_to_string(&path).expect("log file");
    assert!(written.contains("stale grade for u0000001"));
}
