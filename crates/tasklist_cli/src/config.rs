//! Runtime configuration for the CLI binary.
//!
//! # Responsibility
//! - Resolve logging settings from environment variables with defaults.
//! - Pick the front end from command-line flags.

use std::path::PathBuf;
use tasklist_core::{default_log_level, LogConfig, LoggingError};

pub const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TASKLIST_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "tasklist-logs";

/// Settings resolved before the session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log: LogConfig,
}

impl CliConfig {
    /// Reads `TASKLIST_LOG_LEVEL` and `TASKLIST_LOG_DIR`.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::resolve(
            std::env::var(LOG_LEVEL_ENV).ok(),
            std::env::var(LOG_DIR_ENV).ok(),
        )
    }

    /// Applies defaults to unset (or blank) values, then validates.
    ///
    /// # Errors
    /// Returns the `LoggingError` for an unsupported level or a relative dir.
    pub fn resolve(level: Option<String>, log_dir: Option<String>) -> Result<Self, LoggingError> {
        let level = non_blank(level).unwrap_or_else(|| default_log_level().as_str().to_string());
        let log_dir = non_blank(log_dir).unwrap_or_else(default_log_dir);
        Ok(Self {
            log: LogConfig::parse(&level, &log_dir)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn default_log_dir() -> String {
    let dir: PathBuf = std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME);
    dir.to_string_lossy().into_owned()
}

/// What the binary should do, selected by flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typed-command session (default).
    Commands,
    /// Numbered-menu session (`--menu`).
    Menu,
    /// Print the version and exit (`--version`).
    Version,
}

pub const USAGE: &str = "usage: tasklist [--menu | --version]";

impl Mode {
    /// Parses flags after the program name.
    ///
    /// # Errors
    /// Returns the offending argument for anything unrecognized, or the
    /// second flag when more than one is given.
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mode = None;
        for arg in args {
            let arg = arg.as_ref();
            let parsed = match arg {
                "--menu" => Self::Menu,
                "--version" | "-V" => Self::Version,
                other => return Err(other.to_string()),
            };
            if mode.replace(parsed).is_some() {
                return Err(arg.to_string());
            }
        }
        Ok(mode.unwrap_or(Self::Commands))
    }
}
