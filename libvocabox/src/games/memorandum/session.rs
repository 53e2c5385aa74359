//! A memorandum board bound to a word pool and a random source

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use super::actions::MemorandumAction;
use super::pairs::{build_pairs, build_pairs_with_validation, deal_cards, PairsBuild};
use super::reducer::reduce;
use super::state::{MemorandumState, MemorandumStatus, Pair};
use crate::config::MemorandumConfig;
use crate::random::GameRng;
use crate::words::WordPool;

pub struct MemorandumSession {
    pool: Arc<WordPool>,
    rng: GameRng,
    state: MemorandumState,
    mismatch_delay: Duration,
}

impl MemorandumSession {
    pub fn new(pool: Arc<WordPool>, rng: GameRng) -> Self {
        Self::with_config(pool, rng, &MemorandumConfig::default())
    }

    pub fn with_config(pool: Arc<WordPool>, rng: GameRng, config: &MemorandumConfig) -> Self {
        Self {
            pool,
            rng,
            state: MemorandumState::default(),
            mismatch_delay: Duration::from_millis(config.mismatch_delay_ms),
        }
    }

    pub fn state(&self) -> &MemorandumState {
        &self.state
    }

    /// How long a mismatched pair should stay visible before
    /// [`clear_selections_after_delay`](Self::clear_selections_after_delay)
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    /// Deal up to `count` pairs; returns how many were dealt
    pub fn init_game<S: AsRef<str>>(&mut self, categories: &[S], count: usize) -> usize {
        let words = self.pool.pool_from_categories(categories);
        let pairs = build_pairs(&words, count, &mut self.rng);
        if pairs.len() < count {
            tracing::warn!(requested = count, available = pairs.len(), "not enough words for memorandum");
        }
        self.start(pairs)
    }

    /// Deal a board sized by [`build_pairs_with_validation`]
    pub fn init_game_validated<S: AsRef<str>>(&mut self, categories: &[S], count: usize) -> PairsBuild {
        let words = self.pool.pool_from_categories(categories);
        let build = build_pairs_with_validation(&words, count, &mut self.rng);
        if build.has_insufficient_words {
            tracing::warn!(requested = count, dealt = build.actual_count, "not enough words for memorandum");
        }
        self.start(build.pairs.clone());
        build
    }

    fn start(&mut self, pairs: Vec<Pair>) -> usize {
        let dealt = pairs.len();
        let (word_cards, meaning_cards) = deal_cards(&pairs, &mut self.rng);
        self.dispatch(MemorandumAction::Init {
            pairs,
            word_cards,
            meaning_cards,
        });
        dealt
    }

    pub fn select_word(&mut self, card_id: &str) {
        self.dispatch(MemorandumAction::SelectWord(card_id.to_string()));
    }

    pub fn select_meaning(&mut self, card_id: &str) {
        self.dispatch(MemorandumAction::SelectMeaning(card_id.to_string()));
    }

    pub fn clear_selections_after_delay(&mut self) {
        self.dispatch(MemorandumAction::ClearSelections);
    }

    pub fn clear_just_matched_cards(&mut self) {
        self.dispatch(MemorandumAction::ClearJustMatched);
    }

    pub fn reset_game(&mut self) {
        self.dispatch(MemorandumAction::Reset);
    }

    pub fn dispatch(&mut self, action: MemorandumAction) {
        let is_init = matches!(action, MemorandumAction::Init { .. });
        let before = self.state.status;

        let mut next = reduce(std::mem::take(&mut self.state), action);

        if is_init {
            next.started_at = Some(Utc::now());
        }
        if next.status == MemorandumStatus::Finished && before != MemorandumStatus::Finished {
            next.finished_at = Some(Utc::now());
            tracing::debug!(pairs = next.pairs.len(), "memorandum board complete");
        }
        self.state = next;
    }
}
