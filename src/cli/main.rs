//! Command-line interface entry point for `lmsgrade`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use lms_grading::config::Config;
use lms_grading::logger::{
    enable_debug, enable_verbose, init_file_logging, is_file_logging_enabled, set_level, Level,
};
use lms_grading::{debug, error, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    debug!(
        "data_dir = '{}', precision = {}",
        config.paths.data_dir, config.output.precision
    );

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults)
        }
        Command::Grade {
            snapshot,
            class,
            student,
            breakdown,
        } => commands::grade::run(
            &snapshot,
            class,
            student.as_deref(),
            breakdown || verbose,
            &config,
        ),
        Command::Gpa {
            snapshot,
            student,
            letters,
        } => commands::gpa::run(snapshot.as_deref(), student.as_deref(), &letters, &config),
        Command::Schedule {
            snapshot,
            course,
            semester,
            location,
            start,
            end,
            instructor,
        } => {
            let candidate = match (course, semester, location, start, end) {
                (Some(course), Some(semester), Some(location), Some(start), Some(end)) => {
                    Some(commands::schedule::Candidate {
                        course,
                        semester,
                        location,
                        start,
                        end,
                        instructor: instructor.unwrap_or_default(),
                    })
                }
                _ => None,
            };
            commands::schedule::run(&snapshot, candidate, &config)
        }
    };

    if let Err(e) = result {
        // stderr already shows errors when there is no log file
        if is_file_logging_enabled() {
            error!("{e}");
        }
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
