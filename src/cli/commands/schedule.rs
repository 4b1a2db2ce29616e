//! Schedule command handler

use super::load_snapshot;
use chrono::NaiveTime;
use lms_grading::config::Config;
use lms_grading::core::models::{ClassOffering, Course, Semester};
use lms_grading::core::schedule::{audit_offerings, find_conflicts};
use lms_grading::{info, warn};
use std::path::Path;

/// A proposed offering given on the command line
#[derive(Debug, Clone)]
pub struct Candidate {
    pub course: String,
    pub semester: Semester,
    pub location: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub instructor: String,
}

/// Check a candidate offering, or audit every offering in the snapshot.
///
/// # Errors
/// Returns an error if the snapshot cannot be loaded or any conflict is found.
pub fn run(snapshot: &Path, candidate: Option<Candidate>, config: &Config) -> Result<(), String> {
    let gradebook = load_snapshot(snapshot, config)?;
    match candidate {
        Some(candidate) => check_candidate(candidate, &gradebook.offerings, &gradebook.courses),
        None => audit(&gradebook.offerings),
    }
}

fn check_candidate(
    candidate: Candidate,
    existing: &[ClassOffering],
    courses: &[Course],
) -> Result<(), String> {
    if candidate.start > candidate.end {
        return Err(format!(
            "Start {} is after end {}",
            candidate.start.format("%H:%M"),
            candidate.end.format("%H:%M")
        ));
    }
    if !courses.is_empty()
        && !courses
            .iter()
            .any(|c| c.key().eq_ignore_ascii_case(&candidate.course))
    {
        warn!("{} is not in the snapshot's catalog", candidate.course);
    }

    let offering = ClassOffering {
        id: next_offering_id(existing)?,
        course: candidate.course.to_ascii_uppercase(),
        semester: candidate.semester,
        location: candidate.location,
        start: candidate.start,
        end: candidate.end,
        instructor: candidate.instructor,
    };

    let conflicts = find_conflicts(&offering, existing);
    let summary = format!(
        "{} in {} at {} {}-{}",
        offering.course,
        offering.semester,
        offering.location,
        offering.start.format("%H:%M"),
        offering.end.format("%H:%M")
    );

    if conflicts.is_empty() {
        println!("✓ {summary} can be created");
        return Ok(());
    }

    println!("{summary}:");
    for conflict in &conflicts {
        println!("  - {conflict}");
    }
    Err(format!("{} cannot be created", offering.course))
}

/// Id for a new offering: one past the highest existing id
fn next_offering_id(existing: &[ClassOffering]) -> Result<u32, String> {
    existing
        .iter()
        .map(|o| o.id)
        .max()
        .map_or(Some(1), |id| id.checked_add(1))
        .ok_or_else(|| "No offering id left after u32::MAX".to_string())
}

fn audit(offerings: &[ClassOffering]) -> Result<(), String> {
    let rejected = audit_offerings(offerings);
    info!("Audited {} offerings", offerings.len());

    if rejected.is_empty() {
        println!("✓ {} offerings, no conflicts", offerings.len());
        return Ok(());
    }

    for entry in &rejected {
        let label = offerings
            .iter()
            .find(|o| o.id == entry.offering_id)
            .map_or_else(String::new, |o| {
                format!(" {} {} {}", o.course, o.semester, o.location)
            });
        println!("Offering #{}{label}", entry.offering_id);
        for conflict in &entry.conflicts {
            println!("  - {conflict}");
        }
    }
    Err(format!(
        "{} of {} offerings conflict with an earlier offering",
        rejected.len(),
        offerings.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(id: u32) -> ClassOffering {
        ClassOffering {
            id,
            course: "CS5530".to_string(),
            semester: "Fall 2024".parse().expect("semester"),
            location: "WEB L104".to_string(),
            start: NaiveTime::from_hms_opt(9, 10, 0).expect("start"),
            end: NaiveTime::from_hms_opt(10, 30, 0).expect("end"),
            instructor: String::new(),
        }
    }

    #[test]
    fn next_id_follows_highest_existing() {
        assert_eq!(next_offering_id(&[]), Ok(1));
        assert_eq!(next_offering_id(&[offering(4), offering(9), offering(2)]), Ok(10));
    }

    #[test]
    fn next_id_fails_instead_of_overflowing() {
        assert!(next_offering_id(&[offering(u32::MAX)]).is_err());
    }
}
