//! Runtime configuration.
//!
//! Values resolve in order: built-in defaults, then environment variables
//! (a `.env` file is loaded by the binary before this runs), then CLI flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};
use crate::parser::DEFAULT_DELIMITER;

/// Roster file read when no input is configured.
pub const DEFAULT_INPUT_PATH: &str = "Corp_Summary.csv";

/// Statistics export written when no output is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "clean_stats_deps.csv";

/// Menu prompts before giving up on a selection.
pub const DEFAULT_MENU_ATTEMPTS: usize = 10;

pub const ENV_INPUT: &str = "ROSTER_INPUT";
pub const ENV_OUTPUT: &str = "ROSTER_OUTPUT";
pub const ENV_DELIMITER: &str = "ROSTER_DELIMITER";
pub const ENV_MENU_ATTEMPTS: &str = "ROSTER_MENU_ATTEMPTS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Source roster file
    pub input_path: PathBuf,
    /// Destination of the statistics export
    pub output_path: PathBuf,
    /// Field delimiter shared by input and export
    pub delimiter: char,
    /// Upper bound on menu re-prompts
    pub menu_attempts: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: DEFAULT_DELIMITER,
            menu_attempts: DEFAULT_MENU_ATTEMPTS,
        }
    }
}

impl RosterConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(input) = lookup(ENV_INPUT) {
            config.input_path = PathBuf::from(input);
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output_path = PathBuf::from(output);
        }
        if let Some(raw) = lookup(ENV_DELIMITER) {
            config.delimiter = parse_delimiter(ENV_DELIMITER, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MENU_ATTEMPTS) {
            config.menu_attempts = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_MENU_ATTEMPTS,
                        value: raw,
                        message: "expected a positive integer".into(),
                    })
                }
            };
        }

        Ok(config)
    }

    /// Apply CLI overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        delimiter: Option<char>,
    ) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        if let Some(delimiter) = delimiter {
            self.delimiter = delimiter;
        }
        self
    }
}

/// Accept a single ASCII character, or `\t` / `tab` for tabs.
pub fn parse_delimiter(key: &'static str, raw: &str) -> ConfigResult<char> {
    if raw == "\\t" || raw.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '\n' && c != '\r' => Ok(c),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            message: "expected a single ASCII character".into(),
        }),
    }
}
