//! Configuration management for Vocabox
//!
//! Every section has defaults, so an absent file or a partial file is
//! fine. Values that would make a game unplayable (zero-second timers,
//! inverted word length bounds) are rejected by [`Config::validate`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::focus::FocusOrder;
use crate::games::hangman::Difficulty;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub quiz: QuizConfig,
    pub hangman: HangmanConfig,
    pub memorandum: MemorandumConfig,
    pub focus: FocusConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory of `<category>.json` word files. Built-in lists when unset.
    pub words_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub count: usize,
    pub seconds_per_question: u32,
    pub options_per_question: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HangmanConfig {
    pub difficulty: Difficulty,
    pub min_len: usize,
    pub max_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorandumConfig {
    pub count: usize,
    /// How long a mismatched pair stays face up before it is cleared
    pub mismatch_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub countdown_seconds: u64,
    pub per_word_seconds: u64,
    /// Gap between the end-of-slide event and the advance to the next word
    pub fade_out_ms: u64,
    pub order: FocusOrder,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            count: 10,
            seconds_per_question: 10,
            options_per_question: 4,
        }
    }
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            min_len: 5,
            max_len: 14,
        }
    }
}

impl Default for MemorandumConfig {
    fn default() -> Self {
        Self {
            count: 10,
            mismatch_delay_ms: 1000,
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: 5,
            per_word_seconds: 10,
            fade_out_ms: 0,
            order: FocusOrder::Random,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// An explicit `VOCABOX_CONFIG` path must exist. The default XDG path
    /// is optional and falls back to built-in defaults when missing.
    pub fn load() -> Result<Self> {
        if let Some(path) = env_config_path() {
            return Self::load_from_path(&path);
        }

        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject values no game can run with
    pub fn validate(&self) -> Result<()> {
        if self.quiz.seconds_per_question == 0 {
            return Err(invalid("quiz.seconds_per_question", "must be greater than zero"));
        }
        if self.quiz.options_per_question < 2 {
            return Err(invalid("quiz.options_per_question", "must be at least 2"));
        }
        if self.hangman.min_len == 0 || self.hangman.min_len > self.hangman.max_len {
            return Err(invalid(
                "hangman.min_len",
                "must be positive and not greater than hangman.max_len",
            ));
        }
        if self.focus.per_word_seconds == 0 {
            return Err(invalid("focus.per_word_seconds", "must be greater than zero"));
        }
        Ok(())
    }

    /// Words directory with `~` expanded, if configured
    pub fn words_dir(&self) -> Option<PathBuf> {
        self.data
            .words_dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).to_string()))
    }
}

fn invalid(field: &str, reason: &str) -> crate::error::VocaboxError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn env_config_path() -> Option<PathBuf> {
    std::env::var("VOCABOX_CONFIG")
        .ok()
        .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()))
}

/// Resolve the configuration file path following the XDG Base Directory layout
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Some(path) = env_config_path() {
        return Ok(path);
    }

    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

    Ok(config_dir.join("vocabox").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.quiz.count, 10);
        assert_eq!(config.quiz.seconds_per_question, 10);
        assert_eq!(config.hangman.difficulty, Difficulty::Medium);
        assert_eq!((config.hangman.min_len, config.hangman.max_len), (5, 14));
        assert_eq!(config.memorandum.count, 10);
        assert_eq!(config.focus.countdown_seconds, 5);
        assert_eq!(config.focus.per_word_seconds, 10);
        assert_eq!(config.focus.order, FocusOrder::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
[quiz]
count = 5

[hangman]
difficulty = "hard"
"#,
        );

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.quiz.count, 5);
        assert_eq!(config.quiz.seconds_per_question, 10);
        assert_eq!(config.hangman.difficulty, Difficulty::Hard);
        assert_eq!(config.hangman.max_len, 14);
        assert_eq!(config, Config {
            quiz: QuizConfig { count: 5, ..QuizConfig::default() },
            hangman: HangmanConfig { difficulty: Difficulty::Hard, ..HangmanConfig::default() },
            ..Config::default()
        });
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_config("[quiz\ncount = ");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_seconds_rejected() {
        let file = write_config("[quiz]\nseconds_per_question = 0\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(format!("{}", err).contains("quiz.seconds_per_question"));
    }

    #[test]
    fn test_inverted_word_lengths_rejected() {
        let mut config = Config::default();
        config.hangman.min_len = 10;
        config.hangman.max_len = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::load_from_path(Path::new("/nonexistent/vocabox.toml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    #[serial]
    fn test_env_override_is_used() {
        let file = write_config("[memorandum]\ncount = 6\n");
        std::env::set_var("VOCABOX_CONFIG", file.path());

        let config = Config::load();
        std::env::remove_var("VOCABOX_CONFIG");

        assert_eq!(config.unwrap().memorandum.count, 6);
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_default_location() {
        std::env::remove_var("VOCABOX_CONFIG");
        let path = resolve_config_path().unwrap();
        assert!(path.ends_with("vocabox/config.toml"));
    }

    #[test]
    fn test_words_dir_expands_tilde() {
        let config = Config {
            data: DataConfig {
                words_dir: Some("~/vocabox/words".to_string()),
            },
            ..Config::default()
        };
        let dir = config.words_dir().unwrap();
        assert!(dir.ends_with("vocabox/words"));
        if dirs::home_dir().is_some() {
            assert!(!dir.to_string_lossy().starts_with('~'));
        }
    }
}
