//! Integration tests for class-offering conflict checks

use chrono::NaiveTime;
use lms_grading::core::loader::load_gradebook;
use lms_grading::core::models::{ClassOffering, Semester};
use lms_grading::core::schedule::{
    audit_offerings, can_create_offering, find_conflicts, ScheduleConflict,
};

const OFFERINGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/offerings.toml");

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("time")
}

fn candidate(course: &str, semester: &str, location: &str, start: NaiveTime, end: NaiveTime) -> ClassOffering {
    ClassOffering {
        id: 100,
        course: course.to_string(),
        semester: semester.parse::<Semester>().expect("semester"),
        location: location.to_string(),
        start,
        end,
        instructor: String::new(),
    }
}

fn existing() -> Vec<ClassOffering> {
    load_gradebook(OFFERINGS).expect("offerings").offerings
}

#[test]
fn audit_rejects_touching_and_duplicate_offerings() {
    let rejected = audit_offerings(&existing());

    let ids: Vec<u32> = rejected.iter().map(|r| r.offering_id).collect();
    assert_eq!(ids, [2, 3]);

    assert_eq!(
        rejected[0].conflicts,
        vec![ScheduleConflict::RoomOverlap {
            offering_id: 1,
            location: "WEB L104".to_string(),
        }]
    );
    assert!(matches!(
        rejected[1].conflicts[0],
        ScheduleConflict::DuplicateOffering { offering_id: 1, .. }
    ));
}

#[test]
fn free_room_and_new_course_is_accepted() {
    let offering = candidate("CS4400", "Fall 2024", "WEB L105", time(10, 31), time(11, 50));
    assert!(can_create_offering(&offering, &existing()));
    assert!(find_conflicts(&offering, &existing()).is_empty());
}

#[test]
fn shared_endpoint_is_an_overlap() {
    let offering = candidate("CS4400", "Fall 2024", "WEB L105", time(8, 0), time(9, 10));
    assert!(!can_create_offering(&offering, &existing()));
}

#[test]
fn other_semester_never_conflicts() {
    let offering = candidate("CS5530", "Summer 2024", "WEB L104", time(9, 10), time(10, 30));
    assert!(can_create_offering(&offering, &existing()));
}

#[test]
fn empty_schedule_accepts_anything() {
    let offering = candidate("CS5530", "Fall 2024", "WEB L104", time(9, 10), time(10, 30));
    assert!(can_create_offering(&offering, &[]));
}

#[test]
fn both_rules_are_reported() {
    let offering = candidate("MATH2270", "Fall 2024", "WEB L104", time(10, 0), time(11, 0));
    let conflicts = find_conflicts(&offering, &existing());

    // overlaps #1 and #2 in WEB L104, and #5 already offers MATH2270
    assert_eq!(conflicts.len(), 3);
    assert!(conflicts
        .iter()
        .any(|c| matches!(c, ScheduleConflict::DuplicateOffering { offering_id: 5, .. })));
}

#[test]
fn lowercase_course_key_is_a_duplicate() {
    let offering = candidate("cs5530", "Fall 2024", "WEB L106", time(15, 0), time(16, 0));
    let conflicts = find_conflicts(&offering, &existing());

    assert!(!conflicts.is_empty());
    assert!(conflicts
        .iter()
        .all(|c| matches!(c, ScheduleConflict::DuplicateOffering { .. })));
}
