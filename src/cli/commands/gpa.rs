//! GPA command handler

use super::{fixed, load_snapshot};
use lms_grading::config::Config;
use lms_grading::core::grades::{compute_gpa, Grade};
use lms_grading::debug;
use std::path::Path;

/// Print a GPA, either for a student in a snapshot or for explicit letters.
///
/// Snapshot enrollments are re-graded from their scores first, so the GPA
/// reflects current coursework rather than whatever grade was last stored.
///
/// # Errors
/// Returns an error for an unreadable snapshot, a missing `--student`, or a
/// letter that is not a grade.
pub fn run(
    snapshot: Option<&Path>,
    student: Option<&str>,
    letters: &[String],
    config: &Config,
) -> Result<(), String> {
    let precision = config.output.precision;

    if !letters.is_empty() {
        let grades = letters
            .iter()
            .map(|l| l.parse::<Grade>())
            .collect::<Result<Vec<_>, _>>()?;
        let graded = grades.iter().filter(|g| g.is_graded()).count();
        println!(
            "GPA: {} ({graded} graded of {})",
            fixed(compute_gpa(&grades), precision),
            grades.len()
        );
        return Ok(());
    }

    let snapshot = snapshot.ok_or("Provide a SNAPSHOT or --letters")?;
    let student = student.ok_or("--student is required with a SNAPSHOT")?;

    let mut gradebook = load_snapshot(snapshot, config)?;
    let changed = gradebook.refresh_enrollment_grades();
    debug!("Re-graded {changed} enrollments");

    let enrollments = gradebook.enrollments_for(student);
    if enrollments.is_empty() {
        return Err(format!("{student} has no enrollments in {}", snapshot.display()));
    }

    for enrollment in &enrollments {
        let course = gradebook
            .offering(enrollment.class_id)
            .map_or_else(String::new, |o| format!("{} {}", o.course, o.semester));
        println!("  #{:<4} {course:<20} {}", enrollment.class_id, enrollment.grade);
    }

    let graded = enrollments.iter().filter(|e| e.grade.is_graded()).count();
    println!(
        "GPA for {student}: {} ({graded} graded of {})",
        fixed(gradebook.gpa_for(student), precision),
        enrollments.len()
    );
    Ok(())
}
