//! A hangman round bound to a word pool and a random source

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use super::actions::HangmanAction;
use super::difficulty::Difficulty;
use super::reducer::reduce;
use super::state::HangmanState;
use super::word::{build_hangman_word, WordRequest, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use crate::config::HangmanConfig;
use crate::random::GameRng;
use crate::words::WordPool;

/// Seed of today's daily word, `YYYY-MM-DD` in UTC
pub fn daily_seed_for_today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

pub struct HangmanSession {
    pool: Arc<WordPool>,
    rng: GameRng,
    state: HangmanState,
    min_len: usize,
    max_len: usize,
}

impl HangmanSession {
    pub fn new(pool: Arc<WordPool>, rng: GameRng) -> Self {
        Self {
            pool,
            rng,
            state: HangmanState::default(),
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    pub fn with_config(pool: Arc<WordPool>, rng: GameRng, config: &HangmanConfig) -> Self {
        Self {
            min_len: config.min_len,
            max_len: config.max_len,
            ..Self::new(pool, rng)
        }
    }

    pub fn state(&self) -> &HangmanState {
        &self.state
    }

    /// Start a round; `daily` picks today's word instead of a random one
    ///
    /// Returns `false`, leaving the state untouched, when no word of the
    /// categories fits.
    pub fn init_game<S: AsRef<str>>(&mut self, categories: &[S], difficulty: Difficulty, daily: bool) -> bool {
        let seed = daily.then(daily_seed_for_today);
        self.init_game_with_seed(categories, difficulty, seed)
    }

    /// Like [`init_game`](Self::init_game) with an explicit daily seed
    pub fn init_game_with_seed<S: AsRef<str>>(
        &mut self,
        categories: &[S],
        difficulty: Difficulty,
        daily_seed: Option<String>,
    ) -> bool {
        let request = WordRequest {
            categories,
            min_len: self.min_len,
            max_len: self.max_len,
            daily_seed: daily_seed.as_deref(),
        };
        let Some(word) = build_hangman_word(&self.pool, &request, &mut self.rng) else {
            tracing::warn!(
                categories = ?categories.iter().map(|c| c.as_ref()).collect::<Vec<&str>>(),
                "no hangman word fits the selected categories"
            );
            return false;
        };

        tracing::debug!(word_id = %word.id, %difficulty, daily = daily_seed.is_some(), "hangman word chosen");
        self.dispatch(HangmanAction::Init {
            word,
            config: difficulty.config(),
            daily_seed,
        });
        true
    }

    pub fn guess_letter(&mut self, input: &str) {
        self.dispatch(HangmanAction::Guess(input.to_string()));
    }

    pub fn use_hint_meaning(&mut self) {
        self.dispatch(HangmanAction::UseHintMeaning);
    }

    pub fn use_hint_example(&mut self) {
        self.dispatch(HangmanAction::UseHintExample);
    }

    /// Reveal one random unguessed letter
    pub fn use_hint_reveal(&mut self) {
        let unguessed = self.state.unguessed_letters();
        let letter = if unguessed.is_empty() {
            None
        } else {
            Some(unguessed[self.rng.gen_range(0..unguessed.len())])
        };
        self.dispatch(HangmanAction::UseHintReveal { letter });
    }

    pub fn pause_game(&mut self) {
        self.dispatch(HangmanAction::Pause);
    }

    pub fn resume_game(&mut self) {
        self.dispatch(HangmanAction::Resume);
    }

    pub fn give_up(&mut self) {
        self.dispatch(HangmanAction::GiveUp);
    }

    pub fn tick_timer(&mut self) {
        self.dispatch(HangmanAction::TickTimer);
    }

    pub fn calculate_final_score(&mut self) {
        self.dispatch(HangmanAction::CalculateFinalScore);
    }

    pub fn reset_game(&mut self) {
        self.dispatch(HangmanAction::Reset);
    }

    /// Apply an action, stamp times, and settle the score on the way out
    pub fn dispatch(&mut self, action: HangmanAction) {
        let is_init = matches!(action, HangmanAction::Init { .. });
        let before = self.state.status;

        let mut next = reduce(std::mem::take(&mut self.state), action);

        if is_init {
            next.started_at = Some(Utc::now());
        }
        if next.status != before {
            tracing::debug!(from = ?before, to = ?next.status, "hangman status changed");
        }
        if next.status.is_terminal() && !before.is_terminal() {
            next.finished_at = Some(Utc::now());
            next = reduce(next, HangmanAction::CalculateFinalScore);
            tracing::debug!(
                won = next.is_win(),
                score = next.score,
                status = ?next.status,
                "hangman round over"
            );
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::game_rng;
    use crate::games::hangman::state::HangmanStatus;
    use crate::types::Word;

    fn session() -> HangmanSession {
        let pool = WordPool::from_categories([(
            "science",
            vec![
                Word::new("Neurona", "Célula nerviosa").with_example("La neurona transmite impulsos"),
                Word::new("Órbita", "Trayectoria alrededor de un astro"),
            ],
        )]);
        HangmanSession::new(Arc::new(pool), game_rng(Some(7)))
    }

    #[test]
    fn test_init_game() {
        let mut session = session();
        assert!(session.init_game(&["science"], Difficulty::Easy, false));
        let state = session.state();
        assert_eq!(state.status, HangmanStatus::Running);
        assert_eq!(state.max_lives, 8);
        assert!(state.started_at.is_some());
    }

    #[test]
    fn test_init_without_candidates_keeps_state() {
        let mut session = session();
        assert!(!session.init_game(&["sports"], Difficulty::Easy, false));
        assert_eq!(session.state(), &HangmanState::default());
    }

    #[test]
    fn test_daily_seed_is_recorded() {
        let mut session = session();
        assert!(session.init_game_with_seed(&["science"], Difficulty::Medium, Some("2024-01-01".to_string())));
        // 20240101 % 2 == 1
        assert_eq!(session.state().word.as_ref().unwrap().palabra, "Órbita");
        assert_eq!(session.state().daily_seed.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_daily_seed_format() {
        let seed = daily_seed_for_today();
        assert_eq!(seed.len(), 10);
        assert_eq!(seed.matches('-').count(), 2);
    }

    #[test]
    fn test_reveal_picks_unguessed_letter() {
        let mut session = session();
        session.init_game(&["science"], Difficulty::Medium, false);
        session.use_hint_reveal();

        let state = session.state();
        assert!(state.used_hint_reveal);
        assert_eq!(state.guessed_letters.len(), 1);
        assert!(state.word.as_ref().unwrap().contains(state.guessed_letters[0]));
    }

    #[test]
    fn test_terminal_state_gets_scored() {
        let mut session = session();
        session.init_game_with_seed(&["science"], Difficulty::Medium, Some("0".to_string()));
        for c in "NEURONA".chars() {
            session.guess_letter(&c.to_string());
        }

        let state = session.state();
        assert_eq!(state.status, HangmanStatus::Finished);
        assert!(state.finished_at.is_some());
        assert_eq!(state.score, 105);
        assert!(state.stats().won);
    }

    #[test]
    fn test_give_up_is_scored_and_stamped() {
        let mut session = session();
        session.init_game(&["science"], Difficulty::Medium, false);
        session.give_up();
        assert_eq!(session.state().status, HangmanStatus::GivenUp);
        assert!(session.state().finished_at.is_some());
        assert!(session.state().stats().lost);
    }
}
