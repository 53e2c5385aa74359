//! A quiz playthrough bound to a word pool and a random source

use std::sync::Arc;

use chrono::Utc;

use super::actions::QuizAction;
use super::builder::{build_questions, QuestionRequest, DEFAULT_OPTIONS_PER_QUESTION};
use super::reducer::reduce;
use super::state::{QuizState, QuizStatus, DEFAULT_SECONDS_PER_QUESTION};
use crate::config::QuizConfig;
use crate::random::GameRng;
use crate::words::WordPool;

/// Parameters of a new quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSetup {
    pub categories: Vec<String>,
    /// Ask only about this category; distractors still come from all of `categories`
    pub category: Option<String>,
    pub count: usize,
    pub seconds_per_question: u32,
    pub options_per_question: usize,
}

impl QuizSetup {
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            category: None,
            count: 10,
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            options_per_question: DEFAULT_OPTIONS_PER_QUESTION,
        }
    }

    pub fn from_config<S: Into<String>>(categories: impl IntoIterator<Item = S>, config: &QuizConfig) -> Self {
        Self {
            count: config.count,
            seconds_per_question: config.seconds_per_question,
            options_per_question: config.options_per_question,
            ..Self::new(categories)
        }
    }
}

pub struct QuizSession {
    pool: Arc<WordPool>,
    rng: GameRng,
    state: QuizState,
}

impl QuizSession {
    pub fn new(pool: Arc<WordPool>, rng: GameRng) -> Self {
        Self {
            pool,
            rng,
            state: QuizState::default(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Build questions and start; returns how many questions were built
    ///
    /// Zero means the quiz cannot be played; the state is still running so
    /// callers can tell "started with nothing" from "never started".
    pub fn init_game(&mut self, setup: &QuizSetup) -> usize {
        let words = self.pool.pool_from_categories(&setup.categories);
        let request = QuestionRequest {
            words_pool: &words,
            category: setup.category.as_deref(),
            count: setup.count,
            options_per_question: setup.options_per_question,
        };
        let questions = build_questions(request, &mut self.rng);
        let built = questions.len();

        if built == 0 {
            tracing::warn!(categories = ?setup.categories, "no quiz questions could be built");
        } else if built < setup.count {
            tracing::info!(requested = setup.count, built, "word pool smaller than requested quiz");
        }

        self.dispatch(QuizAction::Init {
            questions,
            seconds_per_question: setup.seconds_per_question,
        });
        built
    }

    pub fn tick(&mut self) {
        self.dispatch(QuizAction::Tick);
    }

    pub fn answer_question(&mut self, option_id: &str) {
        self.dispatch(QuizAction::Answer {
            option_id: option_id.to_string(),
        });
    }

    pub fn skip_or_timeout(&mut self) {
        self.dispatch(QuizAction::SkipOrTimeout);
    }

    pub fn pause_game(&mut self) {
        self.dispatch(QuizAction::Pause);
    }

    pub fn resume_game(&mut self) {
        self.dispatch(QuizAction::Resume);
    }

    pub fn reset_game(&mut self) {
        self.dispatch(QuizAction::Reset);
    }

    /// Apply an action and stamp start/finish times
    pub fn dispatch(&mut self, action: QuizAction) {
        let is_init = matches!(action, QuizAction::Init { .. });
        let before = self.state.status;

        let mut next = reduce(std::mem::take(&mut self.state), action);

        if is_init {
            next.started_at = Some(Utc::now());
        }
        if next.status == QuizStatus::Finished && before != QuizStatus::Finished {
            next.finished_at = Some(Utc::now());
            tracing::debug!(score = next.score, correct = next.correct_count(), "quiz finished");
        }
        if next.status != before {
            tracing::debug!(from = ?before, to = ?next.status, "quiz status changed");
        }
        self.state = next;
    }
}
