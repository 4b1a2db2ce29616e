//! Class-offering conflict detection
//!
//! A new offering may be created only if, within its semester:
//! 1. no other offering uses the same location at an overlapping time, and
//! 2. no other offering of the same course exists.
//!
//! Both checks run against a snapshot of existing offerings passed in by the
//! caller; nothing here reads from or writes to storage.

use crate::core::models::{ClassOffering, Semester};
use std::fmt;

/// Why a candidate offering cannot be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleConflict {
    /// Another offering occupies the room at an overlapping time
    RoomOverlap {
        /// The conflicting existing offering
        offering_id: u32,
        /// Shared location
        location: String,
    },
    /// The course is already offered that semester
    DuplicateOffering {
        /// The existing offering of the same course
        offering_id: u32,
        /// Course key
        course: String,
        /// Shared semester
        semester: Semester,
    },
}

impl fmt::Display for ScheduleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoomOverlap {
                offering_id,
                location,
            } => write!(
                f,
                "{location} is already booked at an overlapping time by offering #{offering_id}"
            ),
            Self::DuplicateOffering {
                offering_id,
                course,
                semester,
            } => write!(
                f,
                "{course} is already offered in {semester} (offering #{offering_id})"
            ),
        }
    }
}

/// An offering rejected by [`audit_offerings`], with every reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOffering {
    /// Id of the rejected offering
    pub offering_id: u32,
    /// Conflicts with previously accepted offerings
    pub conflicts: Vec<ScheduleConflict>,
}

fn room_overlap(candidate: &ClassOffering, existing: &ClassOffering) -> Option<ScheduleConflict> {
    (candidate.semester == existing.semester
        && candidate.location == existing.location
        && candidate.overlaps(existing))
    .then(|| ScheduleConflict::RoomOverlap {
        offering_id: existing.id,
        location: existing.location.clone(),
    })
}

fn duplicate_offering(
    candidate: &ClassOffering,
    existing: &ClassOffering,
) -> Option<ScheduleConflict> {
    (candidate.semester == existing.semester && candidate.is_course(&existing.course)).then(|| {
        ScheduleConflict::DuplicateOffering {
            offering_id: existing.id,
            course: existing.course.clone(),
            semester: existing.semester,
        }
    })
}

fn conflicts_with(candidate: &ClassOffering, existing: &ClassOffering) -> bool {
    room_overlap(candidate, existing).is_some() || duplicate_offering(candidate, existing).is_some()
}

/// Whether `candidate` can be added alongside `existing`.
///
/// An empty `existing` set always accepts.
#[must_use]
pub fn can_create_offering(candidate: &ClassOffering, existing: &[ClassOffering]) -> bool {
    !existing.iter().any(|other| conflicts_with(candidate, other))
}

/// Every conflict between `candidate` and `existing`, in `existing` order.
///
/// Empty exactly when [`can_create_offering`] accepts.
#[must_use]
pub fn find_conflicts(candidate: &ClassOffering, existing: &[ClassOffering]) -> Vec<ScheduleConflict> {
    existing
        .iter()
        .flat_map(|other| {
            room_overlap(candidate, other)
                .into_iter()
                .chain(duplicate_offering(candidate, other))
        })
        .collect()
}

/// Replay `offerings` in order, admitting each one that does not conflict
/// with those admitted before it. Returns the rejected offerings.
#[must_use]
pub fn audit_offerings(offerings: &[ClassOffering]) -> Vec<RejectedOffering> {
    let mut accepted: Vec<ClassOffering> = Vec::with_capacity(offerings.len());
    let mut rejected = Vec::new();

    for offering in offerings {
        let conflicts = find_conflicts(offering, &accepted);
        if conflicts.is_empty() {
            accepted.push(offering.clone());
        } else {
            rejected.push(RejectedOffering {
                offering_id: offering.id,
                conflicts,
            });
        }
    }

    rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Season;
    use chrono::NaiveTime;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("time")
    }

    fn offering(
        id: u32,
        course: &str,
        semester: &str,
        location: &str,
        start: NaiveTime,
        end: NaiveTime,
    ) -> ClassOffering {
        ClassOffering {
            id,
            course: course.to_string(),
            semester: semester.parse().expect("semester"),
            location: location.to_string(),
            start,
            end,
            instructor: "u0000010".to_string(),
        }
    }

    #[test]
    fn empty_schedule_accepts() {
        let candidate = offering(1, "CS5530", "Fall 2023", "WEB L104", at(9, 10), at(10, 30));
        assert!(can_create_offering(&candidate, &[]));
        assert!(find_conflicts(&candidate, &[]).is_empty());
    }

    #[test]
    fn rejects_overlap_in_same_room_and_semester() {
        let existing = vec![offering(1, "CS3500", "Fall 2023", "WEB L104", at(9, 0), at(10, 0))];
        let candidate = offering(2, "CS5530", "Fall 2023", "WEB L104", at(9, 30), at(10, 45));

        assert!(!can_create_offering(&candidate, &existing));
        assert_eq!(
            find_conflicts(&candidate, &existing),
            vec![ScheduleConflict::RoomOverlap {
                offering_id: 1,
                location: "WEB L104".to_string()
            }]
        );
    }

    #[test]
    fn touching_endpoints_conflict() {
        let existing = vec![offering(1, "CS3500", "Fall 2023", "WEB L104", at(9, 0), at(10, 0))];
        let candidate = offering(2, "CS5530", "Fall 2023", "WEB L104", at(10, 0), at(11, 0));
        assert!(!can_create_offering(&candidate, &existing));
    }

    #[test]
    fn overlap_in_other_room_or_semester_is_fine() {
        let existing = vec![
            offering(1, "CS3500", "Fall 2023", "WEB L102", at(9, 0), at(10, 0)),
            offering(2, "CS3810", "Spring 2024", "WEB L104", at(9, 0), at(10, 0)),
        ];
        let candidate = offering(3, "CS5530", "Fall 2023", "WEB L104", at(9, 0), at(10, 0));
        assert!(can_create_offering(&candidate, &existing));
    }

    #[test]
    fn same_course_twice_in_a_semester_is_rejected() {
        let existing = vec![offering(1, "CS5530", "Fall 2023", "WEB L104", at(9, 0), at(10, 0))];
        let candidate = offering(2, "CS5530", "Fall 2023", "MEB 3147", at(14, 0), at(15, 20));

        assert!(!can_create_offering(&candidate, &existing));
        assert_eq!(
            find_conflicts(&candidate, &existing),
            vec![ScheduleConflict::DuplicateOffering {
                offering_id: 1,
                course: "CS5530".to_string(),
                semester: Semester::new(Season::Fall, 2023),
            }]
        );
    }

    #[test]
    fn course_keys_differing_only_in_case_are_the_same_course() {
        let existing = vec![offering(1, "CS5530", "Fall 2023", "WEB L104", at(9, 10), at(10, 30))];
        let candidate = offering(2, "cs5530", "Fall 2023", "JWB 335", at(13, 0), at(14, 0));

        assert!(!can_create_offering(&candidate, &existing));

        let rejected = audit_offerings(&[existing[0].clone(), candidate]);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].offering_id, 2);
    }

    #[test]
    fn same_course_in_another_semester_is_accepted() {
        let existing = vec![offering(1, "CS5530", "Fall 2023", "WEB L104", at(9, 0), at(10, 0))];
        let candidate = offering(2, "CS5530", "Spring 2024", "WEB L104", at(9, 0), at(10, 0));
        assert!(can_create_offering(&candidate, &existing));
    }

    #[test]
    fn reports_both_violations_against_one_offering() {
        let existing = vec![offering(1, "CS5530", "Fall 2023", "WEB L104", at(9, 0), at(10, 0))];
        let candidate = offering(2, "CS5530", "Fall 2023", "WEB L104", at(9, 0), at(10, 0));

        let conflicts = find_conflicts(&candidate, &existing);
        assert_eq!(conflicts.len(), 2);
        assert!(matches!(conflicts[0], ScheduleConflict::RoomOverlap { .. }));
        assert!(matches!(conflicts[1], ScheduleConflict::DuplicateOffering { .. }));
    }

    #[test]
    fn audit_rejects_later_conflicting_offerings() {
        let offerings = vec![
            offering(1, "CS5530", "Fall 2023", "WEB L104", at(9, 0), at(10, 0)),
            offering(2, "CS3500", "Fall 2023", "WEB L104", at(9, 30), at(10, 30)),
            offering(3, "CS3500", "Fall 2023", "WEB L104", at(11, 0), at(12, 0)),
            offering(4, "CS3500", "Fall 2023", "MEB 3147", at(13, 0), at(14, 0)),
        ];

        let rejected = audit_offerings(&offerings);
        let ids: Vec<u32> = rejected.iter().map(|r| r.offering_id).collect();
        // 2 overlaps 1; 3 is then the first CS3500; 4 duplicates 3.
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn audit_of_clean_schedule_is_empty() {
        let offerings = vec![
            offering(1, "CS5530", "Fall 2023", "WEB L104", at(9, 0), at(10, 0)),
            offering(2, "CS3500", "Fall 2023", "WEB L104", at(10, 15), at(11, 30)),
        ];
        assert!(audit_offerings(&offerings).is_empty());
    }

    #[test]
    fn conflict_messages_name_the_offering() {
        let conflict = ScheduleConflict::DuplicateOffering {
            offering_id: 7,
            course: "CS5530".to_string(),
            semester: Semester::new(Season::Spring, 2024),
        };
        assert_eq!(
            conflict.to_string(),
            "CS5530 is already offered in Spring 2024 (offering #7)"
        );
    }
}
