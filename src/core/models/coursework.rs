//! Assignment categories, assignments and submissions

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A weighted group of assignments within one class (e.g., "Homework", 40%)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCategory {
    /// Category identifier
    pub id: u32,

    /// Offering this category belongs to
    pub class_id: u32,

    /// Category name, unique per class ignoring case
    pub name: String,

    /// Percent of the final grade, 0 to 100
    pub weight: u32,
}

impl AssignmentCategory {
    /// Create a new assignment category
    #[must_use]
    pub const fn new(id: u32, class_id: u32, name: String, weight: u32) -> Self {
        Self {
            id,
            class_id,
            name,
            weight,
        }
    }
}

/// A gradable assignment in a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment identifier
    pub id: u32,

    /// Category this assignment belongs to
    pub category_id: u32,

    /// Assignment name, unique per category ignoring case
    pub name: String,

    /// Maximum score; must be positive
    pub max_points: u32,

    /// Due date
    pub due: NaiveDateTime,

    /// Assignment text shown to students
    #[serde(default)]
    pub contents: String,
}

impl Assignment {
    /// Create a new assignment with empty contents
    #[must_use]
    pub const fn new(
        id: u32,
        category_id: u32,
        name: String,
        max_points: u32,
        due: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            category_id,
            name,
            max_points,
            due,
            contents: String::new(),
        }
    }
}

/// A student's submission to an assignment
///
/// At most one exists per (assignment, student) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Assignment submitted to
    pub assignment_id: u32,

    /// uid of the submitting student
    pub student: String,

    /// Score awarded by the professor; `None` until graded
    #[serde(default)]
    pub score: Option<u32>,

    /// Submitted text
    #[serde(default)]
    pub contents: String,

    /// Time of the latest submission
    pub submitted_at: NaiveDateTime,
}

impl Submission {
    /// Create a new, ungraded submission
    #[must_use]
    pub const fn new(
        assignment_id: u32,
        student: String,
        contents: String,
        submitted_at: NaiveDateTime,
    ) -> Self {
        Self {
            assignment_id,
            student,
            score: None,
            contents,
            submitted_at,
        }
    }

    /// Points earned toward the category total; ungraded counts as zero
    #[must_use]
    pub fn earned_points(&self) -> u32 {
        self.score.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("timestamp")
    }

    #[test]
    fn new_submission_is_ungraded() {
        let submission = Submission::new(7, "u0000001".to_string(), "answer".to_string(), noon());
        assert!(submission.score.is_none());
        assert_eq!(submission.earned_points(), 0);
    }

    #[test]
    fn graded_submission_earns_its_score() {
        let mut submission = Submission::new(7, "u0000001".to_string(), String::new(), noon());
        submission.score = Some(18);
        assert_eq!(submission.earned_points(), 18);
    }

    #[test]
    fn new_assignment_has_no_contents() {
        let assignment = Assignment::new(1, 2, "HW1".to_string(), 10, noon());
        assert!(assignment.contents.is_empty());
        assert_eq!(assignment.max_points, 10);
    }
}
