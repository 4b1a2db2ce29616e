//! Grade command handler

use super::{fixed, load_snapshot};
use lms_grading::config::Config;
use lms_grading::core::grades::{Grade, UNGRADED_MARKER};
use lms_grading::core::models::{ClassOffering, Gradebook};
use lms_grading::{debug, warn};
use std::path::Path;

/// Print computed grades for the snapshot's classes.
///
/// # Errors
/// Returns an error if the snapshot cannot be loaded, or the class or student
/// filter matches nothing.
pub fn run(
    snapshot: &Path,
    class: Option<u32>,
    student: Option<&str>,
    breakdown: bool,
    config: &Config,
) -> Result<(), String> {
    let gradebook = load_snapshot(snapshot, config)?;

    let offerings: Vec<&ClassOffering> = match class {
        Some(id) => vec![gradebook
            .offering(id)
            .ok_or_else(|| format!("No class #{id} in {}", snapshot.display()))?],
        None => gradebook.offerings.iter().collect(),
    };

    let mut printed = 0;
    for offering in offerings {
        let students: Vec<&str> = gradebook
            .enrollments
            .iter()
            .filter(|e| e.class_id == offering.id)
            .map(|e| e.student.as_str())
            .filter(|s| student.map_or(true, |wanted| wanted == *s))
            .collect();
        if students.is_empty() {
            debug!("Class #{} has no matching enrollments", offering.id);
            continue;
        }

        println!(
            "{} {} (class #{}, {})",
            offering.course, offering.semester, offering.id, offering.location
        );
        for uid in students {
            print_student(&gradebook, offering.id, uid, breakdown, config.output.precision);
            printed += 1;
        }
    }

    if printed == 0 {
        if let Some(uid) = student {
            return Err(format!("{uid} is not enrolled in any matching class"));
        }
        println!("No enrollments to grade");
    }
    Ok(())
}

fn print_student(gradebook: &Gradebook, class_id: u32, student: &str, breakdown: bool, precision: u8) {
    let grade = gradebook.grade_for(class_id, student);
    let percentage = gradebook
        .percentage_for(class_id, student)
        .map_or_else(|| UNGRADED_MARKER.to_string(), |p| format!("{}%", fixed(p, precision)));

    println!("  {student:<12} {percentage:>10}  {grade}");

    if let Some(recorded) = gradebook
        .enrollments
        .iter()
        .find(|e| e.class_id == class_id && e.student == student)
        .map(|e| e.grade)
    {
        if recorded != Grade::Ungraded && recorded != grade {
            warn!("Recorded grade {recorded} for {student} in class #{class_id} is stale (computed {grade})");
        }
    }

    if breakdown {
        for category in gradebook.category_breakdown(class_id, student) {
            let share = category.ratio().map_or_else(
                || "no assignments".to_string(),
                |r| format!("{}%", fixed(r * 100.0, precision)),
            );
            println!(
                "      {:<16} weight {:>3}  {:>4}/{:<4} {share}",
                category.name, category.weight, category.earned, category.possible
            );
        }
    }
}
