//! Difficulty presets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VocaboxError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Rules derived from a [`Difficulty`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub max_lives: u32,
    pub hints_enabled: bool,
    pub timer_enabled: bool,
    pub seconds_per_word: Option<u32>,
}

impl Difficulty {
    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                max_lives: 8,
                hints_enabled: true,
                timer_enabled: false,
                seconds_per_word: None,
            },
            Difficulty::Medium => DifficultyConfig {
                max_lives: 6,
                hints_enabled: true,
                timer_enabled: false,
                seconds_per_word: None,
            },
            Difficulty::Hard => DifficultyConfig {
                max_lives: 4,
                hints_enabled: false,
                timer_enabled: true,
                seconds_per_word: Some(120),
            },
        }
    }

    /// Parse a level name, falling back to medium for anything unknown
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = VocaboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(VocaboxError::InvalidInput(format!(
                "unknown difficulty '{}' (expected easy, medium or hard)",
                other
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::Easy.config().max_lives, 8);
        assert_eq!(Difficulty::Medium.config().max_lives, 6);

        let hard = Difficulty::Hard.config();
        assert_eq!(hard.max_lives, 4);
        assert!(!hard.hints_enabled);
        assert!(hard.timer_enabled);
        assert_eq!(hard.seconds_per_word, Some(120));
    }

    #[test]
    fn test_parse() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("brutal".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::parse_lenient("brutal"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient("easy"), Difficulty::Easy);
    }

    #[test]
    fn test_display_round_trips() {
        for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(level.to_string().parse::<Difficulty>().unwrap(), level);
        }
    }
}
