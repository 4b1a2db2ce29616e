//! Configuration module for `lms-grading`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path values
const DIR_VARIABLE: &str = "$LMS_GRADING";

/// Decimal places used when a config file does not say
const DEFAULT_PRECISION: u8 = 2;

/// Highest accepted `precision`
const MAX_PRECISION: u8 = 6;

const fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for gradebook snapshots given as relative paths
    #[serde(default)]
    pub data_dir: String,
}

/// Output formatting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places printed for percentages and GPAs
    #[serde(default = "default_precision")]
    pub precision: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override snapshot data directory
    pub data_dir: Option<String>,
    /// Override output precision
    pub precision: Option<u8>,
}

fn parse_precision(value: &str) -> Result<u8, String> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|p| *p <= MAX_PRECISION)
        .ok_or_else(|| {
            format!("Invalid value for 'precision': '{value}' (expected 0-{MAX_PRECISION})")
        })
}

impl Config {
    /// Get the `$LMS_GRADING` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/lmsgrade`
    /// - macOS: `~/Library/Application Support/lmsgrade`
    /// - Windows: `%APPDATA%\lmsgrade`
    #[must_use]
    pub fn get_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lmsgrade")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_config_dir`](Self::get_config_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in, so values a user set are never replaced.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (field, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.data_dir, &defaults.paths.data_dir),
        ] {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; nothing is written to disk. Only
    /// non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(precision) = overrides.precision {
            self.output.precision = precision.min(MAX_PRECISION);
        }
    }

    /// Replace `$LMS_GRADING` in `value` with the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let config_dir = Self::get_config_dir();
            value.replace(DIR_VARIABLE, config_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults; `$LMS_GRADING` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.output.precision = config.output.precision.min(MAX_PRECISION);

        Ok(config)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The file
    /// is compiled into the binary, so this is caught by the test suite.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it from defaults
    /// on first run. Falls back to defaults if the file is unreadable.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`
    ///
    /// - File exists: parse it, merge in any newly added defaults and save it back.
    /// - File missing: write the defaults there and return them.
    /// - File unreadable or invalid: return the defaults, leaving the file alone.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        let Ok(content) = fs::read_to_string(config_file) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as pretty TOML to `config_file`, creating parent
    /// directories as needed
    ///
    /// # Errors
    /// Returns an error if serialization fails or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir` (or `data-dir`),
    /// `precision`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "precision" => Some(self.output.precision.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// (e.g. `verbose = maybe`, `precision = 12`, `level = loud`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = crate::logger::Level::parse(value)
                    .ok_or_else(|| format!("Invalid log level: '{value}'"))?;
                self.logging.level = format!("{level:?}").to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "precision" => self.output.precision = parse_precision(value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its value in `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "precision" => self.output.precision = defaults.output.precision,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file.
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;

        writeln!(f, "\n[output]")?;
        writeln!(f, "  precision = {}", self.output.precision)?;

        Ok(())
    }
}
