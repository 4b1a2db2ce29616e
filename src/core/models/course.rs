//! Course model

use serde::{Deserialize, Serialize};

/// A catalog course, independent of any semester it is offered in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Department subject abbreviation (e.g., "CS", "MATH")
    pub subject: String,

    /// Course number (e.g., 5530)
    pub number: u32,

    /// Course name (e.g., "Database Systems")
    pub name: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `subject` - Subject abbreviation
    /// * `number` - Course number
    /// * `name` - Full course name
    #[must_use]
    pub const fn new(subject: String, number: u32, name: String) -> Self {
        Self {
            subject,
            number,
            name,
        }
    }

    /// Get the course key used by offerings to refer to this course
    ///
    /// # Returns
    /// A string in the format "SUBJECTNUMBER" (e.g., "CS5530")
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{}", self.subject, self.number)
    }

    /// Whether this course has the given subject and number.
    /// Subject comparison ignores ASCII case.
    #[must_use]
    pub fn is(&self, subject: &str, number: u32) -> bool {
        self.number == number && self.subject.eq_ignore_ascii_case(subject)
    }
}
