//! Class offering model

use super::Semester;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A scheduled instance of a course in one semester, room and time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOffering {
    /// Offering identifier; categories and enrollments refer to it as `class_id`
    pub id: u32,

    /// Course key, "SUBJECTNUMBER" (see [`super::Course::key`])
    pub course: String,

    /// Semester the class is taught in
    pub semester: Semester,

    /// Room the class meets in
    pub location: String,

    /// Daily start time
    pub start: NaiveTime,

    /// Daily end time
    pub end: NaiveTime,

    /// uid of the professor teaching the class
    #[serde(default)]
    pub instructor: String,
}

impl ClassOffering {
    /// Whether two offerings' meeting times overlap.
    ///
    /// Ranges are closed, so a class ending at 10:30 overlaps one starting at 10:30.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether this is an offering of the course with key `course`.
    /// Subjects are compared ignoring ASCII case, like [`super::Course::is`].
    #[must_use]
    pub fn is_course(&self, course: &str) -> bool {
        self.course.eq_ignore_ascii_case(course)
    }

    /// Whether the offering starts no later than it ends
    #[must_use]
    pub fn has_valid_time_range(&self) -> bool {
        self.start <= self.end
    }
}
