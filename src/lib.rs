//! Shared library for `lms-grading`
//! Grade aggregation, GPA and class-schedule checks used by the `lmsgrade` CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
