//! Uniqueness rules and record lifecycle for the LMS catalog
//!
//! Each check is a predicate over a snapshot of existing records, so callers
//! decide what to do with the answer (refuse the request, report, ...).

use crate::core::models::{Assignment, AssignmentCategory, Course, Enrollment, Submission};

/// What [`record_submission`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// First submission for this assignment and student
    Created,
    /// An earlier submission was replaced; its score was kept
    Replaced,
}

/// Whether the catalog already holds a course with this subject and number
#[must_use]
pub fn course_exists(courses: &[Course], subject: &str, number: u32) -> bool {
    courses.iter().any(|course| course.is(subject, number))
}

/// Whether `class_id` already has a category called `name` (ignoring case)
#[must_use]
pub fn category_name_taken(categories: &[AssignmentCategory], class_id: u32, name: &str) -> bool {
    let name = name.trim().to_lowercase();
    categories
        .iter()
        .any(|c| c.class_id == class_id && c.name.trim().to_lowercase() == name)
}

/// Whether `category_id` already has an assignment called `name` (ignoring case)
#[must_use]
pub fn assignment_name_taken(assignments: &[Assignment], category_id: u32, name: &str) -> bool {
    let name = name.trim().to_lowercase();
    assignments
        .iter()
        .any(|a| a.category_id == category_id && a.name.trim().to_lowercase() == name)
}

/// Whether `student` is enrolled in `class_id`
#[must_use]
pub fn is_enrolled(enrollments: &[Enrollment], class_id: u32, student: &str) -> bool {
    enrollments
        .iter()
        .any(|e| e.class_id == class_id && e.student == student)
}

/// A new enrollment for `student`, or `None` if they are already enrolled.
///
/// New enrollments always start ungraded; the grade is filled in once there
/// is coursework to grade.
#[must_use]
pub fn enroll(enrollments: &[Enrollment], class_id: u32, student: &str) -> Option<Enrollment> {
    (!is_enrolled(enrollments, class_id, student))
        .then(|| Enrollment::new(class_id, student.to_string()))
}

/// Store `submission`, replacing the student's previous one for the same
/// assignment. A replacement takes the new contents and time but keeps the
/// score already given.
pub fn record_submission(
    submissions: &mut Vec<Submission>,
    submission: Submission,
) -> SubmissionOutcome {
    let existing = submissions.iter_mut().find(|s| {
        s.assignment_id == submission.assignment_id && s.student == submission.student
    });

    match existing {
        Some(previous) => {
            previous.contents = submission.contents;
            previous.submitted_at = submission.submitted_at;
            SubmissionOutcome::Replaced
        }
        None => {
            submissions.push(submission);
            SubmissionOutcome::Created
        }
    }
}
