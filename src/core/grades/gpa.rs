//! GPA calculation

use crate::core::grades::Grade;

/// Unweighted grade-point average over a student's class grades.
///
/// Every class counts the same. Ungraded classes are left out of both the
/// sum and the count; with no graded classes the GPA is 0.0.
#[must_use]
pub fn compute_gpa<'a, I>(grades: I) -> f64
where
    I: IntoIterator<Item = &'a Grade>,
{
    let (total, count) = grades
        .into_iter()
        .filter_map(|grade| grade.grade_points())
        .fold((0.0, 0_u32), |(total, count), points| (total + points, count + 1));

    if count == 0 {
        0.0
    } else {
        total / f64::from(count)
    }
}
