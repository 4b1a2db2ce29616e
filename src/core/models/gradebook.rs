//! Gradebook snapshot: every record the grading and scheduling checks read
//!
//! A `Gradebook` is a read-only copy of what the LMS store holds for a set of
//! classes. It builds the lookup maps the grade aggregator expects and checks
//! its own consistency before anything is computed from it.

use super::{Assignment, AssignmentCategory, ClassOffering, Course, Enrollment, Submission};
use crate::core::catalog::{assignment_name_taken, category_name_taken, is_enrolled};
use crate::core::grades::aggregate::{
    score_categories, weighted_percentage, AssignmentsByCategory, CategoryScore,
    SubmissionsByAssignment,
};
use crate::core::grades::{compute_gpa, compute_letter_grade, Grade};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Snapshot of catalog, schedule and coursework records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gradebook {
    /// Catalog courses
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Class offerings, in creation order
    #[serde(default)]
    pub offerings: Vec<ClassOffering>,

    /// Assignment categories of all classes
    #[serde(default)]
    pub categories: Vec<AssignmentCategory>,

    /// Assignments of all categories
    #[serde(default)]
    pub assignments: Vec<Assignment>,

    /// Student submissions
    #[serde(default)]
    pub submissions: Vec<Submission>,

    /// Student enrollments
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
}

impl Gradebook {
    /// Create an empty gradebook
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an offering by id
    #[must_use]
    pub fn offering(&self, class_id: u32) -> Option<&ClassOffering> {
        self.offerings.iter().find(|o| o.id == class_id)
    }

    /// Categories belonging to one class
    #[must_use]
    pub fn categories_for(&self, class_id: u32) -> Vec<AssignmentCategory> {
        self.categories
            .iter()
            .filter(|c| c.class_id == class_id)
            .cloned()
            .collect()
    }

    /// Enrollments of one student, in snapshot order
    #[must_use]
    pub fn enrollments_for(&self, student: &str) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.student == student)
            .collect()
    }

    /// Assignments grouped by category id
    #[must_use]
    pub fn assignments_by_category(&self) -> AssignmentsByCategory {
        let mut grouped = AssignmentsByCategory::new();
        for assignment in &self.assignments {
            grouped
                .entry(assignment.category_id)
                .or_default()
                .push(assignment.clone());
        }
        grouped
    }

    /// Submissions grouped by assignment id
    #[must_use]
    pub fn submissions_by_assignment(&self) -> SubmissionsByAssignment {
        let mut grouped = SubmissionsByAssignment::new();
        for submission in &self.submissions {
            grouped
                .entry(submission.assignment_id)
                .or_default()
                .push(submission.clone());
        }
        grouped
    }

    /// Per-category totals for `student` in `class_id`
    #[must_use]
    pub fn category_breakdown(&self, class_id: u32, student: &str) -> Vec<CategoryScore> {
        score_categories(
            &self.categories_for(class_id),
            &self.assignments_by_category(),
            &self.submissions_by_assignment(),
            student,
        )
    }

    /// Weighted percentage for `student` in `class_id`, `None` when ungraded
    #[must_use]
    pub fn percentage_for(&self, class_id: u32, student: &str) -> Option<f64> {
        weighted_percentage(&self.category_breakdown(class_id, student))
    }

    /// Letter grade for `student` in `class_id`, computed from scores
    #[must_use]
    pub fn grade_for(&self, class_id: u32, student: &str) -> Grade {
        compute_letter_grade(
            &self.categories_for(class_id),
            &self.assignments_by_category(),
            &self.submissions_by_assignment(),
            student,
        )
    }

    /// Computed grade of every student enrolled in `class_id`
    #[must_use]
    pub fn class_grades(&self, class_id: u32) -> Vec<(String, Grade)> {
        let categories = self.categories_for(class_id);
        let assignments = self.assignments_by_category();
        let submissions = self.submissions_by_assignment();

        self.enrollments
            .iter()
            .filter(|e| e.class_id == class_id)
            .map(|e| {
                let grade = compute_letter_grade(&categories, &assignments, &submissions, &e.student);
                (e.student.clone(), grade)
            })
            .collect()
    }

    /// Recompute every enrollment's grade from current scores.
    ///
    /// Returns how many enrollment grades changed.
    pub fn refresh_enrollment_grades(&mut self) -> usize {
        let assignments = self.assignments_by_category();
        let submissions = self.submissions_by_assignment();
        let mut changed = 0;

        for index in 0..self.enrollments.len() {
            let enrollment = &self.enrollments[index];
            let categories = self.categories_for(enrollment.class_id);
            let grade =
                compute_letter_grade(&categories, &assignments, &submissions, &enrollment.student);
            if self.enrollments[index].grade != grade {
                self.enrollments[index].grade = grade;
                changed += 1;
            }
        }

        changed
    }

    /// GPA over the grades recorded on the student's enrollments
    #[must_use]
    pub fn gpa_for(&self, student: &str) -> f64 {
        compute_gpa(self.enrollments_for(student).into_iter().map(|e| &e.grade))
    }

    /// Check the snapshot for records the grading code may not assume away.
    ///
    /// # Errors
    /// Returns every problem found, one per line.
    pub fn validate(&self) -> Result<(), String> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("\n"))
        }
    }

    /// Every consistency problem in the snapshot
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        self.check_offerings(&mut problems);
        self.check_categories(&mut problems);
        self.check_assignments(&mut problems);
        self.check_submissions(&mut problems);
        self.check_enrollments(&mut problems);
        problems
    }

    fn check_offerings(&self, problems: &mut Vec<String>) {
        let mut ids = HashSet::new();
        for offering in &self.offerings {
            if !ids.insert(offering.id) {
                problems.push(format!("Duplicate offering id {}", offering.id));
            }
            if !offering.has_valid_time_range() {
                problems.push(format!(
                    "Offering #{} starts at {} after it ends at {}",
                    offering.id, offering.start, offering.end
                ));
            }
            if !self.courses.is_empty()
                && !self.courses.iter().any(|c| offering.is_course(&c.key()))
            {
                problems.push(format!(
                    "Offering #{} refers to unknown course '{}'",
                    offering.id, offering.course
                ));
            }
        }
    }

    fn check_categories(&self, problems: &mut Vec<String>) {
        let mut ids = HashSet::new();
        for (index, category) in self.categories.iter().enumerate() {
            if !ids.insert(category.id) {
                problems.push(format!("Duplicate category id {}", category.id));
            }
            if category.weight > 100 {
                problems.push(format!(
                    "Category '{}' has weight {} (must be 0-100)",
                    category.name, category.weight
                ));
            }
            if self.offering(category.class_id).is_none() {
                problems.push(format!(
                    "Category '{}' refers to unknown class #{}",
                    category.name, category.class_id
                ));
            }
            if category_name_taken(&self.categories[..index], category.class_id, &category.name) {
                problems.push(format!(
                    "Category name '{}' is used twice in class #{}",
                    category.name, category.class_id
                ));
            }
        }
    }

    fn check_assignments(&self, problems: &mut Vec<String>) {
        let mut ids = HashSet::new();
        for (index, assignment) in self.assignments.iter().enumerate() {
            if !ids.insert(assignment.id) {
                problems.push(format!("Duplicate assignment id {}", assignment.id));
            }
            if assignment.max_points == 0 {
                problems.push(format!(
                    "Assignment '{}' has no points available",
                    assignment.name
                ));
            }
            if !self.categories.iter().any(|c| c.id == assignment.category_id) {
                problems.push(format!(
                    "Assignment '{}' refers to unknown category #{}",
                    assignment.name, assignment.category_id
                ));
            }
            if assignment_name_taken(
                &self.assignments[..index],
                assignment.category_id,
                &assignment.name,
            ) {
                problems.push(format!(
                    "Assignment name '{}' is used twice in category #{}",
                    assignment.name, assignment.category_id
                ));
            }
        }
    }

    fn check_submissions(&self, problems: &mut Vec<String>) {
        let mut seen = HashSet::new();
        for submission in &self.submissions {
            if !seen.insert((submission.assignment_id, submission.student.as_str())) {
                problems.push(format!(
                    "More than one submission by {} to assignment #{}",
                    submission.student, submission.assignment_id
                ));
            }
            let Some(assignment) = self
                .assignments
                .iter()
                .find(|a| a.id == submission.assignment_id)
            else {
                problems.push(format!(
                    "Submission by {} refers to unknown assignment #{}",
                    submission.student, submission.assignment_id
                ));
                continue;
            };
            if let Some(score) = submission.score {
                if score > assignment.max_points {
                    problems.push(format!(
                        "Submission by {} to '{}' scores {score} of {} points",
                        submission.student, assignment.name, assignment.max_points
                    ));
                }
            }
        }
    }

    fn check_enrollments(&self, problems: &mut Vec<String>) {
        for (index, enrollment) in self.enrollments.iter().enumerate() {
            if self.offering(enrollment.class_id).is_none() {
                problems.push(format!(
                    "Enrollment of {} refers to unknown class #{}",
                    enrollment.student, enrollment.class_id
                ));
            }
            if is_enrolled(
                &self.enrollments[..index],
                enrollment.class_id,
                &enrollment.student,
            ) {
                problems.push(format!(
                    "{} is enrolled twice in class #{}",
                    enrollment.student, enrollment.class_id
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::LetterGrade;
    use crate::core::models::{Season, Semester};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn due() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 2)
            .and_then(|d| d.and_hms_opt(23, 59, 0))
            .expect("due")
    }

    fn offering(id: u32, course: &str) -> ClassOffering {
        ClassOffering {
            id,
            course: course.to_string(),
            semester: Semester::new(Season::Fall, 2023),
            location: format!("Room {id}"),
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("start"),
            end: NaiveTime::from_hms_opt(10, 0, 0).expect("end"),
            instructor: "u0000010".to_string(),
        }
    }

    fn graded(assignment_id: u32, student: &str, score: u32) -> Submission {
        let mut submission = Submission::new(assignment_id, student.to_string(), String::new(), due());
        submission.score = Some(score);
        submission
    }

    /// Two classes; alice has 95% in #1 and 75% in #2, bob never submitted.
    fn sample() -> Gradebook {
        Gradebook {
            courses: vec![
                Course::new("CS".to_string(), 5530, "Database Systems".to_string()),
                Course::new("CS".to_string(), 3500, "Software Practice".to_string()),
            ],
            offerings: vec![offering(1, "CS5530"), offering(2, "CS3500")],
            categories: vec![
                AssignmentCategory::new(1, 1, "Homework".to_string(), 50),
                AssignmentCategory::new(2, 1, "Exams".to_string(), 50),
                AssignmentCategory::new(3, 2, "Labs".to_string(), 100),
            ],
            assignments: vec![
                Assignment::new(1, 1, "HW1".to_string(), 10, due()),
                Assignment::new(2, 2, "Midterm".to_string(), 100, due()),
                Assignment::new(3, 3, "Lab1".to_string(), 20, due()),
            ],
            submissions: vec![
                graded(1, "alice", 10),
                graded(2, "alice", 90),
                graded(3, "alice", 15),
            ],
            enrollments: vec![
                Enrollment::new(1, "alice".to_string()),
                Enrollment::new(2, "alice".to_string()),
                Enrollment::new(1, "bob".to_string()),
            ],
        }
    }

    #[test]
    fn computes_grades_per_class() {
        let book = sample();
        assert_eq!(book.grade_for(1, "alice"), Grade::Letter(LetterGrade::A));
        assert_eq!(book.grade_for(2, "alice"), Grade::Letter(LetterGrade::C));
        assert_eq!(book.grade_for(1, "bob"), Grade::Letter(LetterGrade::E));
    }

    #[test]
    fn class_grades_cover_enrolled_students_only() {
        let book = sample();
        let grades = book.class_grades(1);
        assert_eq!(
            grades,
            vec![
                ("alice".to_string(), Grade::Letter(LetterGrade::A)),
                ("bob".to_string(), Grade::Letter(LetterGrade::E)),
            ]
        );
        assert_eq!(book.class_grades(2).len(), 1);
    }

    #[test]
    fn refresh_updates_enrollments_and_gpa() {
        let mut book = sample();
        assert!(book.gpa_for("alice").abs() < f64::EPSILON);

        assert_eq!(book.refresh_enrollment_grades(), 3);
        // A (4.0) and C (2.0)
        assert!((book.gpa_for("alice") - 3.0).abs() < 1e-9);
        assert!(book.gpa_for("bob").abs() < f64::EPSILON);

        assert_eq!(book.refresh_enrollment_grades(), 0);
    }

    #[test]
    fn class_without_coursework_stays_ungraded() {
        let mut book = sample();
        book.offerings.push(offering(3, "CS5530"));
        book.enrollments.push(Enrollment::new(3, "carol".to_string()));
        book.refresh_enrollment_grades();
        assert_eq!(book.grade_for(3, "carol"), Grade::Ungraded);
        assert!(book.percentage_for(3, "carol").is_none());
    }

    #[test]
    fn sample_is_valid() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn flags_invalid_records() {
        let mut book = sample();
        book.categories.push(AssignmentCategory::new(4, 1, "homework".to_string(), 120));
        book.assignments.push(Assignment::new(4, 9, "Ghost".to_string(), 0, due()));
        book.submissions.push(graded(1, "alice", 3));
        book.enrollments.push(Enrollment::new(1, "bob".to_string()));

        let problems = book.problems();
        assert!(problems.iter().any(|p| p.contains("weight 120")));
        assert!(problems.iter().any(|p| p.contains("used twice in class #1")));
        assert!(problems.iter().any(|p| p.contains("no points available")));
        assert!(problems.iter().any(|p| p.contains("unknown category #9")));
        assert!(problems.iter().any(|p| p.contains("More than one submission")));
        assert!(problems.iter().any(|p| p.contains("enrolled twice")));
        assert!(book.validate().is_err());
    }

    #[test]
    fn flags_scores_above_max_points() {
        let mut book = sample();
        book.submissions[0].score = Some(11);
        let problems = book.problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("scores 11 of 10 points"));
    }

    #[test]
    fn lowercase_course_key_matches_catalog() {
        let mut book = sample();
        book.offerings.push(offering(3, "cs5530"));
        assert!(!book
            .problems()
            .iter()
            .any(|p| p.contains("unknown course")));

        book.offerings.push(offering(4, "CS9999"));
        assert!(book
            .problems()
            .iter()
            .any(|p| p.contains("unknown course 'CS9999'")));
    }

    #[test]
    fn flags_inverted_offering_times() {
        let mut book = sample();
        book.offerings[0].start = NaiveTime::from_hms_opt(11, 0, 0).expect("start");
        assert!(book.problems().iter().any(|p| p.contains("after it ends")));
    }
}
