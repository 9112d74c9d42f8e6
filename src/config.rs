//! Configuration management.
//!
//! Settings are read from an optional TOML file. Every field has a default, so
//! an empty file (or no file at all) yields a playable configuration.

use crate::game::SessionRules;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

fn default_max_attempts() -> usize {
    5
}

fn default_row_time_limit_secs() -> u64 {
    15
}

fn default_final_time_limit_secs() -> u64 {
    120
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dictionary: DictionarySettings,
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the word list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySettings {
    /// JSON or text word file; the embedded list is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Rules for interactive play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Guesses allowed per word
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Seconds per classic row, 0 disables the timer
    #[serde(default = "default_row_time_limit_secs")]
    pub row_time_limit_secs: u64,
    /// Seconds for the whole final
    #[serde(default = "default_final_time_limit_secs")]
    pub final_time_limit_secs: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            row_time_limit_secs: default_row_time_limit_secs(),
            final_time_limit_secs: default_final_time_limit_secs(),
        }
    }
}

impl GameSettings {
    /// Session rules for these settings
    #[must_use]
    pub fn rules(&self) -> SessionRules {
        SessionRules {
            max_attempts: self.max_attempts,
            row_time_limit: (self.row_time_limit_secs > 0)
                .then(|| Duration::from_secs(self.row_time_limit_secs)),
            final_time_limit: Duration::from_secs(self.final_time_limit_secs),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Whether to output logs in JSON format
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, or defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or does not validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values make sense together.
    ///
    /// # Errors
    ///
    /// Fails on zero attempts, a zero-length final or an empty log level.
    pub fn validate(&self) -> Result<()> {
        if self.game.max_attempts == 0 {
            bail!("game.max_attempts must be at least 1");
        }
        if self.game.final_time_limit_secs == 0 {
            bail!("game.final_time_limit_secs must be at least 1");
        }
        if self.logging.level.trim().is_empty() {
            bail!("logging.level must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.game.max_attempts, 5);
        assert_eq!(config.logging.level, "warn");
        assert!(config.dictionary.path.is_none());
    }

    #[test]
    fn no_path_uses_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [dictionary]
            path = "data/words.json"

            [game]
            max_attempts = 6
            row_time_limit_secs = 0
            final_time_limit_secs = 90

            [logging]
            level = "debug"
            json_format = true
            "#,
        )
        .unwrap();

        assert_eq!(config.dictionary.path, Some(PathBuf::from("data/words.json")));
        assert_eq!(config.game.max_attempts, 6);
        assert!(config.logging.json_format);

        let rules = config.game.rules();
        assert_eq!(rules.max_attempts, 6);
        assert_eq!(rules.row_time_limit, None);
        assert_eq!(rules.final_time_limit, Duration::from_secs(90));
    }

    #[test]
    fn default_rules_match_session_defaults() {
        assert_eq!(GameSettings::default().rules(), SessionRules::default());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(AppConfig::from_toml_str("[game]\nmax_attempts = 0").is_err());
        assert!(AppConfig::from_toml_str("[game]\nfinal_time_limit_secs = 0").is_err());
        assert!(AppConfig::from_toml_str("[logging]\nlevel = \"\"").is_err());
        assert!(AppConfig::from_toml_str("[game\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("lingo-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[game]\nmax_attempts = 6\n\n[logging]\nlevel = \"debug\"\n").unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.game.max_attempts, 6);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.game.final_time_limit_secs, 120);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/lingo.toml"))).is_err());
    }
}
