//! Runtime configuration: where the contact file lives and how loud logging is.
//!
//! Values come from command-line flags first, then the environment (a `.env`
//! file is read if present), then built-in defaults.

use std::env;
use std::path::PathBuf;

use crate::error::{RolodexError, RolodexResult};

pub const DEFAULT_FILE: &str = "contacts.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const FILE_VAR: &str = "ROLODEX_FILE";
pub const LOG_VAR: &str = "ROLODEX_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Contact file, relative to the working directory unless absolute.
    pub file: PathBuf,

    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults.
    pub fn from_env() -> RolodexResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(env::var(FILE_VAR).ok(), env::var(LOG_VAR).ok())
    }

    fn from_vars(file: Option<String>, log_level: Option<String>) -> RolodexResult<Self> {
        let mut config = Config::default();

        if let Some(f) = file {
            if f.trim().is_empty() {
                return Err(RolodexError::Config(format!("{} cannot be empty", FILE_VAR)));
            }
            config.file = PathBuf::from(f.trim());
        }
        if let Some(level) = log_level.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Overrides the contact file, as given by `--file`.
    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = file;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.file, PathBuf::from("contacts.json"));
    }

    #[test]
    fn file_var_overrides_default() {
        let config = Config::from_vars(Some("data/people.json".into()), None).unwrap();
        assert_eq!(config.file, PathBuf::from("data/people.json"));
    }

    #[test]
    fn blank_file_var_is_rejected() {
        assert!(Config::from_vars(Some("   ".into()), None).is_err());
    }

    #[test]
    fn blank_log_level_keeps_default() {
        let config = Config::from_vars(None, Some(" ".into())).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn flag_overrides_environment() {
        let config = Config::from_vars(Some("env.json".into()), None)
            .unwrap()
            .with_file(PathBuf::from("flag.json"));
        assert_eq!(config.file, PathBuf::from("flag.json"));
    }
}
