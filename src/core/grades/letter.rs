//! Letter grades, the percentage breakpoint table and grade points

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text used for an ungraded class or enrollment
pub const UNGRADED_MARKER: &str = "--";

/// Slack allowed when comparing a percentage against a breakpoint, so that
/// e.g. 87/100 computed through floating point still lands on 87.
const BREAKPOINT_TOLERANCE: f64 = 1e-9;

/// Letter grades on the standard 12-step scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LetterGrade {
    /// 93 and above
    A,
    /// 90 to below 93
    AMinus,
    /// 87 to below 90
    BPlus,
    /// 83 to below 87
    B,
    /// 80 to below 83
    BMinus,
    /// 77 to below 80
    CPlus,
    /// 73 to below 77
    C,
    /// 70 to below 73
    CMinus,
    /// 67 to below 70
    DPlus,
    /// 63 to below 67
    D,
    /// 60 to below 63
    DMinus,
    /// Below 60
    E,
}

/// Minimum percentage for each letter, highest first. Anything below the
/// last entry is an E.
const BREAKPOINTS: [(f64, LetterGrade); 11] = [
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (63.0, LetterGrade::D),
    (60.0, LetterGrade::DMinus),
];

impl LetterGrade {
    /// Every letter, best first
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::E,
    ];

    /// Map a 0-100 percentage to a letter using the breakpoint table
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        BREAKPOINTS
            .iter()
            .find(|(threshold, _)| percentage + BREAKPOINT_TOLERANCE >= *threshold)
            .map_or(Self::E, |&(_, letter)| letter)
    }

    /// Grade-point value on a 4.0 scale
    #[must_use]
    pub const fn grade_points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::DMinus => 0.7,
            Self::E => 0.0,
        }
    }

    /// Display form, e.g. `"B+"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::E => "E",
        }
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    /// Parse `"A"`, `"b+"`, `"C-"`. The Unicode minus sign is accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('\u{2212}', "-").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|letter| letter.as_str() == normalized)
            .ok_or_else(|| format!("Unknown letter grade: '{}'", s.trim()))
    }
}

impl TryFrom<String> for LetterGrade {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LetterGrade> for String {
    fn from(letter: LetterGrade) -> Self {
        letter.as_str().to_string()
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class grade: a letter, or the ungraded sentinel (`--`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    /// A computed or assigned letter
    Letter(LetterGrade),
    /// No grade yet
    #[default]
    Ungraded,
}

impl Grade {
    /// The letter, if graded
    #[must_use]
    pub const fn letter(self) -> Option<LetterGrade> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Ungraded => None,
        }
    }

    /// Whether this is a letter grade
    #[must_use]
    pub const fn is_graded(self) -> bool {
        matches!(self, Self::Letter(_))
    }

    /// Grade points, or `None` when ungraded
    #[must_use]
    pub fn grade_points(self) -> Option<f64> {
        self.letter().map(LetterGrade::grade_points)
    }
}

impl From<LetterGrade> for Grade {
    fn from(letter: LetterGrade) -> Self {
        Self::Letter(letter)
    }
}

impl FromStr for Grade {
    type Err = String;

    /// `"--"` or an empty string is ungraded; anything else must be a letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == UNGRADED_MARKER {
            Ok(Self::Ungraded)
        } else {
            trimmed.parse().map(Self::Letter)
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => f.write_str(letter.as_str()),
            Self::Ungraded => f.write_str(UNGRADED_MARKER),
        }
    }
}
