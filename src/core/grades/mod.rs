//! Grade computation: letter grades, weighted aggregation and GPA

pub mod aggregate;
pub mod gpa;
pub mod letter;

pub use aggregate::{compute_letter_grade, compute_percentage, CategoryScore};
pub use gpa::compute_gpa;
pub use letter::{Grade, LetterGrade, UNGRADED_MARKER};
