//! Config command handler

use crate::args::ConfigSubcommand;
use lms_grading::config::Config;
use lms_grading::info;
use std::io::{self, BufRead, Write};

/// Run a config subcommand; `get` without a key shows everything.
///
/// # Errors
/// Returns an error for an unknown key, an invalid value or a failed write.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            println!("# {}\n{config}", Config::get_config_file_path().display());
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            let value = config
                .get(&key)
                .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
            println!("{value}");
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            config.set(&key, &value)?;
            persist(config)?;
            println!("✓ Set {key} = {}", config.get(&key).unwrap_or(value));
        }
        Some(ConfigSubcommand::Unset { key }) => {
            config.unset(&key, defaults)?;
            persist(config)?;
            println!("✓ Reset {key} to default");
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock())?,
    }
    Ok(())
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Saved {}", Config::get_config_file_path().display());
    Ok(())
}

/// Delete the user config file once the answer read from `input` confirms it
fn reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset lmsgrade config to defaults? (y/n): ");
    io::stdout().flush().ok();
    let mut answer = String::new();
    input.read_line(&mut answer).ok();

    if confirmed(&answer) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yes_confirms() {
        assert!(confirmed("y\n"));
        assert!(confirmed(" YES "));
        assert!(!confirmed("n"));
        assert!(!confirmed(""));
        assert!(!confirmed("yes please"));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let result = run(
            Some(ConfigSubcommand::Get {
                key: Some("colour".to_string()),
            }),
            &mut config,
            &defaults,
        );
        assert_eq!(result, Err("Unknown config key: 'colour'".to_string()));
    }

    #[test]
    fn invalid_value_is_rejected_before_saving() {
        let defaults = Config::from_defaults();
        let mut config = defaults.clone();
        let result = run(
            Some(ConfigSubcommand::Set {
                key: "precision".to_string(),
                value: "12".to_string(),
            }),
            &mut config,
            &defaults,
        );
        assert!(result.is_err());
        assert_eq!(config, defaults);
    }
}
