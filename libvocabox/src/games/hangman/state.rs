//! Hangman state and selectors

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::word::{fold_display_char, HangmanWord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HangmanStatus {
    Idle,
    Running,
    Paused,
    Finished,
    GivenUp,
}

impl HangmanStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, HangmanStatus::Finished | HangmanStatus::GivenUp)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HangmanStatus::Idle => "idle",
            HangmanStatus::Running => "running",
            HangmanStatus::Paused => "paused",
            HangmanStatus::Finished => "finished",
            HangmanStatus::GivenUp => "givenup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HangmanState {
    pub status: HangmanStatus,
    pub word: Option<HangmanWord>,
    pub guessed_letters: Vec<char>,
    pub wrong_letters: Vec<char>,
    pub max_lives: u32,
    pub lives_left: u32,
    pub hints_enabled: bool,
    pub used_hint_meaning: bool,
    pub used_hint_example: bool,
    pub used_hint_reveal: bool,
    pub timer_enabled: bool,
    pub seconds_left: Option<u32>,
    /// Full clock of a timed round, the reference for the time bonus
    pub seconds_per_word: Option<u32>,
    pub score: u32,
    pub daily_seed: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for HangmanState {
    fn default() -> Self {
        Self {
            status: HangmanStatus::Idle,
            word: None,
            guessed_letters: Vec::new(),
            wrong_letters: Vec::new(),
            max_lives: 6,
            lives_left: 6,
            hints_enabled: true,
            used_hint_meaning: false,
            used_hint_example: false,
            used_hint_reveal: false,
            timer_enabled: false,
            seconds_left: None,
            seconds_per_word: None,
            score: 0,
            daily_seed: None,
            started_at: None,
            finished_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HintAvailability {
    pub meaning: bool,
    pub example: bool,
    pub reveal_letter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HangmanStats {
    pub word_length: usize,
    pub total_guesses: usize,
    pub wrong_guesses: usize,
    pub hints_used: u32,
    pub lives_left: u32,
    pub max_lives: u32,
    pub time_left: Option<u32>,
    pub score: u32,
    pub won: bool,
    pub lost: bool,
}

impl HangmanState {
    /// Display form with unguessed letters as `_`
    pub fn masked_word(&self) -> String {
        let Some(word) = &self.word else {
            return String::new();
        };
        word.display
            .chars()
            .map(|c| match fold_display_char(c) {
                Some(letter) if self.guessed_letters.contains(&letter) => c,
                Some(_) => '_',
                None => c,
            })
            .collect()
    }

    /// Letters of the word not yet guessed, repeated as often as they occur
    pub fn unguessed_letters(&self) -> Vec<char> {
        self.word
            .as_ref()
            .map(|word| {
                word.normalized
                    .chars()
                    .filter(|c| super::word::is_letter(*c) && !self.guessed_letters.contains(c))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_win(&self) -> bool {
        let Some(word) = &self.word else {
            return false;
        };
        self.status != HangmanStatus::GivenUp
            && word.letters().iter().all(|l| self.guessed_letters.contains(l))
    }

    /// Out of lives, given up, or out of time without completing the word
    pub fn is_loss(&self) -> bool {
        if self.word.is_none() || self.is_win() {
            return false;
        }
        self.lives_left == 0
            || self.status == HangmanStatus::GivenUp
            || self.status == HangmanStatus::Finished
    }

    pub fn is_game_finished(&self) -> bool {
        self.is_win() || self.is_loss() || self.status.is_terminal()
    }

    pub fn hints_used(&self) -> u32 {
        [self.used_hint_meaning, self.used_hint_example, self.used_hint_reveal]
            .iter()
            .filter(|used| **used)
            .count() as u32
    }

    pub fn available_hints(&self) -> HintAvailability {
        let Some(word) = &self.word else {
            return HintAvailability::default();
        };
        if self.status != HangmanStatus::Running || !self.hints_enabled {
            return HintAvailability::default();
        }
        HintAvailability {
            meaning: !self.used_hint_meaning,
            example: !self.used_hint_example && word.ejemplo.is_some(),
            reveal_letter: !self.used_hint_reveal,
        }
    }

    /// Share of distinct letters already found, 0..=100
    pub fn progress_percentage(&self) -> u32 {
        let Some(word) = &self.word else {
            return 0;
        };
        let letters: BTreeSet<char> = word.letters();
        if letters.is_empty() {
            return 0;
        }
        let found = self
            .guessed_letters
            .iter()
            .filter(|l| letters.contains(l))
            .count();
        ((found as f64 / letters.len() as f64) * 100.0).round() as u32
    }

    pub fn stats(&self) -> HangmanStats {
        HangmanStats {
            word_length: self.word.as_ref().map(HangmanWord::letter_count).unwrap_or(0),
            total_guesses: self.guessed_letters.len(),
            wrong_guesses: self.wrong_letters.len(),
            hints_used: self.hints_used(),
            lives_left: self.lives_left,
            max_lives: self.max_lives,
            time_left: self.seconds_left,
            score: self.score,
            won: self.is_win(),
            lost: self.is_loss(),
        }
    }
}
