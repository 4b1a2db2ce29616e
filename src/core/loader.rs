//! TOML loader for gradebook snapshots
//!
//! A snapshot file lists records as arrays of tables:
//!
//! ```toml
//! [[offerings]]
//! id = 1
//! course = "CS5530"
//! semester = "Fall 2023"
//! location = "WEB L104"
//! start = "09:10:00"
//! end = "10:30:00"
//!
//! [[categories]]
//! id = 1
//! class_id = 1
//! name = "Homework"
//! weight = 40
//! ```
//!
//! plus `courses`, `assignments`, `submissions` and `enrollments`. Every table
//! is optional.

use crate::core::models::Gradebook;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse and validate a snapshot from TOML text
///
/// # Errors
/// Returns an error if the TOML does not match the snapshot schema or the
/// records fail [`Gradebook::validate`].
pub fn parse_gradebook(content: &str) -> Result<Gradebook, Box<dyn Error>> {
    let gradebook: Gradebook = toml::from_str(content)?;
    gradebook
        .validate()
        .map_err(|problems| format!("Invalid gradebook:\n{problems}"))?;
    Ok(gradebook)
}

/// Read, parse and validate a snapshot file
///
/// # Arguments
/// * `path` - Path to the TOML snapshot
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or is inconsistent
pub fn load_gradebook<P: AsRef<Path>>(path: P) -> Result<Gradebook, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    parse_gradebook(&content)
}

/// Resolve a snapshot path given on the command line.
///
/// Paths that exist, or are absolute, are used as given. Otherwise a relative
/// path is looked up under `data_dir` when that is set.
#[must_use]
pub fn resolve_snapshot_path(path: &Path, data_dir: &str) -> PathBuf {
    if path.exists() || path.is_absolute() || data_dir.is_empty() {
        return path.to_path_buf();
    }
    let candidate = Path::new(data_dir).join(path);
    if candidate.exists() {
        candidate
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::{Grade, LetterGrade};

    const SNAPSHOT: &str = r#"
[[courses]]
subject = "CS"
number = 5530
name = "Database Systems"

[[offerings]]
id = 1
course = "CS5530"
semester = "Fall 2023"
location = "WEB L104"
start = "09:10:00"
end = "10:30:00"
instructor = "u0000010"

[[categories]]
id = 1
class_id = 1
name = "Homework"
weight = 100

[[assignments]]
id = 1
category_id = 1
name = "HW1"
max_points = 10
due = "2023-09-15T23:59:00"

[[submissions]]
assignment_id = 1
student = "u0000001"
score = 9
submitted_at = "2023-09-14T20:00:00"

[[enrollments]]
class_id = 1
student = "u0000001"
grade = "--"
"#;

    #[test]
    fn parses_a_complete_snapshot() {
        let book = parse_gradebook(SNAPSHOT).expect("snapshot");
        assert_eq!(book.courses.len(), 1);
        assert_eq!(book.offerings[0].semester.to_string(), "Fall 2023");
        assert_eq!(book.enrollments[0].grade, Grade::Ungraded);
        assert_eq!(
            book.grade_for(1, "u0000001"),
            Grade::Letter(LetterGrade::AMinus)
        );
    }

    #[test]
    fn empty_snapshot_is_valid() {
        let book = parse_gradebook("").expect("empty snapshot");
        assert_eq!(book, Gradebook::new());
    }

    #[test]
    fn rejects_unknown_letter_grades() {
        let content = SNAPSHOT.replace("grade = \"--\"", "grade = \"F\"");
        assert!(parse_gradebook(&content).is_err());
    }

    #[test]
    fn rejects_inconsistent_snapshots() {
        let content = SNAPSHOT.replace("max_points = 10", "max_points = 0");
        let err = parse_gradebook(&content).expect_err("zero points");
        assert!(err.to_string().contains("no points available"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_gradebook("does/not/exist.toml").expect_err("missing file");
        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn absolute_paths_are_not_redirected() {
        let path = Path::new("/definitely/not/here.toml");
        assert_eq!(resolve_snapshot_path(path, "/tmp"), path.to_path_buf());
    }
}
