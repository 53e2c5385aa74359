//! Quiz state and read-only selectors

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    Idle,
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub word_id: String,
    pub word: String,
    pub correct_meaning: String,
    pub options: Vec<QuizOption>,
    pub category: String,
    pub example: Option<String>,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// How the player dealt with one question
///
/// Skipped and timed-out questions have an empty `selected_option_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: String,
    pub selected_option_id: String,
    pub is_correct: bool,
    pub time_left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based position of the current question, capped at `total`
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizState {
    pub status: QuizStatus,
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub seconds_per_question: u32,
    pub time_left: u32,
    /// Keyed by question id
    pub answers: HashMap<String, UserAnswer>,
    pub score: u32,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            status: QuizStatus::Idle,
            questions: Vec::new(),
            current_index: 0,
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            time_left: DEFAULT_SECONDS_PER_QUESTION,
            answers: HashMap::new(),
            score: 0,
            started_at: None,
            finished_at: None,
        }
    }
}

impl QuizState {
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        Progress {
            current: (self.current_index + 1).min(total),
            total,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.answers.values().filter(|a| a.is_correct).count()
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&UserAnswer> {
        self.answers.get(question_id)
    }

    pub fn is_finished(&self) -> bool {
        self.status == QuizStatus::Finished
    }

    /// A running quiz with no questions cannot be played
    pub fn is_playable(&self) -> bool {
        !self.questions.is_empty()
    }
}
