//! Data models for `lms-grading`

pub mod course;
pub mod coursework;
pub mod enrollment;
pub mod gradebook;
pub mod offering;
pub mod semester;

pub use course::Course;
pub use coursework::{Assignment, AssignmentCategory, Submission};
pub use enrollment::Enrollment;
pub use gradebook::Gradebook;
pub use offering::ClassOffering;
pub use semester::{Season, Semester};
