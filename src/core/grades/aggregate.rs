//! Weighted-category grade aggregation
//!
//! A student's class percentage is the weight-averaged score over the
//! assignment categories that contain at least one assignment:
//!
//! ```text
//! category score = earned points / possible points
//! percentage     = Σ(score × weight) / Σ(weight) × 100
//! ```
//!
//! Categories without assignments drop out of both sums, so a class whose
//! 40% "Final" category is still empty is graded out of the remaining 60%.
//! Missing or ungraded submissions earn zero points.

use crate::core::grades::{Grade, LetterGrade};
use crate::core::models::{Assignment, AssignmentCategory, Submission};
use std::collections::HashMap;

/// Assignments keyed by their category id
pub type AssignmentsByCategory = HashMap<u32, Vec<Assignment>>;

/// Submissions keyed by their assignment id
pub type SubmissionsByAssignment = HashMap<u32, Vec<Submission>>;

/// One student's totals in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    /// Category id
    pub category_id: u32,
    /// Category name
    pub name: String,
    /// Category weight (percent of the final grade)
    pub weight: u32,
    /// Points the student earned across the category's assignments
    pub earned: u64,
    /// Sum of the assignments' maximum points
    pub possible: u64,
}

impl CategoryScore {
    /// Earned over possible, or `None` when nothing can be earned
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> Option<f64> {
        (self.possible > 0).then(|| self.earned as f64 / self.possible as f64)
    }
}

/// Per-category totals for `student`, skipping categories with no assignments.
///
/// Categories are returned in input order.
#[must_use]
pub fn score_categories(
    categories: &[AssignmentCategory],
    assignments_by_category: &AssignmentsByCategory,
    submissions_by_assignment: &SubmissionsByAssignment,
    student: &str,
) -> Vec<CategoryScore> {
    categories
        .iter()
        .filter_map(|category| {
            let assignments = assignments_by_category
                .get(&category.id)
                .filter(|assignments| !assignments.is_empty())?;

            let (earned, possible) =
                assignments
                    .iter()
                    .fold((0_u64, 0_u64), |(earned, possible), assignment| {
                        let points =
                            earned_points(submissions_by_assignment, assignment.id, student);
                        (
                            earned + u64::from(points),
                            possible + u64::from(assignment.max_points),
                        )
                    });

            Some(CategoryScore {
                category_id: category.id,
                name: category.name.clone(),
                weight: category.weight,
                earned,
                possible,
            })
        })
        .collect()
}

fn earned_points(
    submissions_by_assignment: &SubmissionsByAssignment,
    assignment_id: u32,
    student: &str,
) -> u32 {
    submissions_by_assignment
        .get(&assignment_id)
        .and_then(|submissions| submissions.iter().find(|s| s.student == student))
        .map_or(0, Submission::earned_points)
}

/// Weighted percentage (0-100) from already scored categories.
///
/// Returns `None` when no category carries any weight.
#[must_use]
pub fn weighted_percentage(scores: &[CategoryScore]) -> Option<f64> {
    let mut weighted_total = 0.0;
    let mut total_weight: u32 = 0;

    for score in scores {
        let Some(ratio) = score.ratio() else {
            continue;
        };
        weighted_total += ratio * f64::from(score.weight);
        total_weight = total_weight.saturating_add(score.weight);
    }

    if total_weight == 0 {
        return None;
    }
    Some(weighted_total * 100.0 / f64::from(total_weight))
}

/// Weighted percentage (0-100) for `student` in one class.
///
/// Returns `None` when no category with assignments carries any weight.
#[must_use]
pub fn compute_percentage(
    categories: &[AssignmentCategory],
    assignments_by_category: &AssignmentsByCategory,
    submissions_by_assignment: &SubmissionsByAssignment,
    student: &str,
) -> Option<f64> {
    let scores = score_categories(
        categories,
        assignments_by_category,
        submissions_by_assignment,
        student,
    );
    weighted_percentage(&scores)
}

/// Letter grade for `student` in one class.
///
/// `categories` should be the class's categories; the maps may hold entries
/// for other classes, which are ignored. Returns [`Grade::Ungraded`] when no
/// category has both assignments and a non-zero weight.
#[must_use]
pub fn compute_letter_grade(
    categories: &[AssignmentCategory],
    assignments_by_category: &AssignmentsByCategory,
    submissions_by_assignment: &SubmissionsByAssignment,
    student: &str,
) -> Grade {
    compute_percentage(
        categories,
        assignments_by_category,
        submissions_by_assignment,
        student,
    )
    .map_or(Grade::Ungraded, |percentage| {
        Grade::Letter(LetterGrade::from_percentage(percentage))
    })
}
