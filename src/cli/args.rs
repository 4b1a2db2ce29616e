//! CLI argument definitions for `lmsgrade`

use chrono::NaiveTime;
use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use lms_grading::config::ConfigOverrides;
use lms_grading::core::models::Semester;
use lms_grading::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a time of day given as `HH:MM` or `HH:MM:SS`
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| format!("Invalid time '{value}': expected HH:MM or HH:MM:SS"))
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`, `precision`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute class grades from a gradebook snapshot.
    ///
    /// Prints the weighted percentage and letter grade of every enrollment,
    /// optionally narrowed to one class and/or one student.
    Grade {
        /// Path to the gradebook snapshot (TOML)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Only show this class offering
        #[arg(long, value_name = "ID")]
        class: Option<u32>,

        /// Only show this student
        #[arg(long, value_name = "UID")]
        student: Option<String>,

        /// Show per-category points under each grade
        #[arg(long)]
        breakdown: bool,
    },
    /// Compute a grade-point average.
    ///
    /// Either from a student's classes in a snapshot, or from a comma-separated
    /// list of letter grades given with --letters (`--` marks an ungraded class).
    Gpa {
        /// Path to the gradebook snapshot (TOML)
        #[arg(value_name = "SNAPSHOT", required_unless_present = "letters")]
        snapshot: Option<PathBuf>,

        /// Student whose GPA to compute
        #[arg(long, value_name = "UID", requires = "snapshot")]
        student: Option<String>,

        /// Letter grades to average instead of reading a snapshot (e.g. A,B+,--,C)
        #[arg(
            long,
            value_name = "GRADES",
            value_delimiter = ',',
            conflicts_with = "snapshot",
            allow_hyphen_values = true
        )]
        letters: Vec<String>,
    },
    /// Check class offerings for room and course conflicts.
    ///
    /// Without --course, replays the snapshot's offerings in order and lists
    /// every one that conflicts with an earlier one. With --course and the
    /// other candidate flags, checks whether that new offering may be created.
    Schedule {
        /// Path to the gradebook snapshot (TOML)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Candidate course key (e.g., CS5530)
        #[arg(long, value_name = "COURSE", requires_all = ["semester", "location", "start", "end"])]
        course: Option<String>,

        /// Candidate semester (e.g., "Fall 2024")
        #[arg(long, value_name = "SEMESTER", requires = "course")]
        semester: Option<Semester>,

        /// Candidate location
        #[arg(long, value_name = "ROOM", requires = "course")]
        location: Option<String>,

        /// Candidate start time (HH:MM)
        #[arg(long, value_name = "TIME", value_parser = parse_time_of_day, requires = "course")]
        start: Option<NaiveTime>,

        /// Candidate end time (HH:MM)
        #[arg(long, value_name = "TIME", value_parser = parse_time_of_day, requires = "course")]
        end: Option<NaiveTime>,

        /// Candidate instructor uid
        #[arg(long, value_name = "UID", requires = "course")]
        instructor: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "lmsgrade",
    about = "Grades, GPAs and schedule checks for LMS gradebook snapshots",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config snapshot data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config snapshot data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Decimal places for percentages and GPAs
    #[arg(long, value_name = "DIGITS", global = true)]
    pub precision: Option<u8>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data-dir`) take precedence over long-form
    /// flags (e.g., `--config-data-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .or(self.config_data_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            precision: self.precision,
        }
    }
}
