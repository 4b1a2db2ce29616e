//! Core module: data model, grading, scheduling and configuration

pub mod catalog;
pub mod config;
pub mod grades;
pub mod loader;
pub mod models;
pub mod schedule;

/// Returns the current version of the `lms-grading` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
