//! Semester model ("Spring 2024")

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season part of a semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            other => Err(format!("Unknown season: '{other}'")),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        };
        f.write_str(name)
    }
}

/// A season and a year. Serialized as its text form, e.g. `"Fall 2023"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Semester {
    /// Calendar year
    pub year: u16,
    /// Season within the year
    pub season: Season,
}

impl Semester {
    /// Create a new semester
    #[must_use]
    pub const fn new(season: Season, year: u16) -> Self {
        Self { year, season }
    }
}

impl FromStr for Semester {
    type Err = String;

    /// Parse `"<Season> <Year>"`, e.g. `"Spring 2024"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(season), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Invalid semester '{s}': expected '<Season> <Year>'"));
        };
        let year = year
            .parse::<u16>()
            .map_err(|_| format!("Invalid year in semester '{s}'"))?;
        Ok(Self::new(season.parse()?, year))
    }
}

impl TryFrom<String> for Semester {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Semester> for String {
    fn from(semester: Semester) -> Self {
        semester.to_string()
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}
