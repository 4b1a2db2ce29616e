//! Enrollment model

use crate::core::grades::Grade;
use serde::{Deserialize, Serialize};

/// A student's enrollment in a class offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Offering the student is enrolled in
    pub class_id: u32,

    /// uid of the student
    pub student: String,

    /// Current grade in the class, `--` until one is computed
    #[serde(default)]
    pub grade: Grade,
}

impl Enrollment {
    /// Create an ungraded enrollment
    #[must_use]
    pub const fn new(class_id: u32, student: String) -> Self {
        Self {
            class_id,
            student,
            grade: Grade::Ungraded,
        }
    }
}
