//! CLI command handlers for `lmsgrade`.
//!
//! Each command is implemented in its own submodule. Snapshot commands
//! return `Err` with a message for the caller to print.

pub mod config;
pub mod gpa;
pub mod grade;
pub mod schedule;

use lms_grading::config::Config;
use lms_grading::core::loader::{load_gradebook, resolve_snapshot_path};
use lms_grading::core::models::Gradebook;
use lms_grading::info;
use std::path::Path;

/// Load a snapshot, looking relative paths up under `paths.data_dir`
fn load_snapshot(path: &Path, config: &Config) -> Result<Gradebook, String> {
    let resolved = resolve_snapshot_path(path, &config.paths.data_dir);
    let gradebook = load_gradebook(&resolved).map_err(|e| e.to_string())?;
    info!(
        "Loaded {}: {} offerings, {} enrollments, {} submissions",
        resolved.display(),
        gradebook.offerings.len(),
        gradebook.enrollments.len(),
        gradebook.submissions.len()
    );
    Ok(gradebook)
}

/// Format a number with the configured number of decimals
fn fixed(value: f64, precision: u8) -> String {
    format!("{value:.*}", usize::from(precision))
}
