//! Memorandum board state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemorandumStatus {
    Idle,
    Running,
    Finished,
}

/// A word and its meaning; the id is the word id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub id: String,
    pub word: String,
    pub meaning: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Word,
    Meaning,
}

/// One face of a pair. A matched card stays flipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub pair_id: String,
    pub kind: CardKind,
    pub label: String,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    pub fn new(kind: CardKind, pair: &Pair) -> Self {
        let (prefix, label) = match kind {
            CardKind::Word => ("word", &pair.word),
            CardKind::Meaning => ("meaning", &pair.meaning),
        };
        Self {
            id: format!("{}-{}", prefix, pair.id),
            pair_id: pair.id.clone(),
            kind,
            label: label.clone(),
            flipped: false,
            matched: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemorandumState {
    pub status: MemorandumStatus,
    pub pairs: Vec<Pair>,
    pub word_cards: Vec<Card>,
    pub meaning_cards: Vec<Card>,
    pub selected_word_id: Option<String>,
    pub selected_meaning_id: Option<String>,
    /// Set while a mismatched pair is on display
    pub lock_input: bool,
    /// The two cards of the latest match, for feedback
    pub just_matched_card_ids: Vec<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Default for MemorandumState {
    fn default() -> Self {
        Self {
            status: MemorandumStatus::Idle,
            pairs: Vec::new(),
            word_cards: Vec::new(),
            meaning_cards: Vec::new(),
            selected_word_id: None,
            selected_meaning_id: None,
            lock_input: false,
            just_matched_card_ids: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }
}

impl MemorandumState {
    pub fn word_card(&self, id: &str) -> Option<&Card> {
        self.word_cards.iter().find(|c| c.id == id)
    }

    pub fn meaning_card(&self, id: &str) -> Option<&Card> {
        self.meaning_cards.iter().find(|c| c.id == id)
    }

    pub fn matched_pairs_count(&self) -> usize {
        self.word_cards.iter().filter(|c| c.matched).count()
    }

    pub fn remaining_pairs_count(&self) -> usize {
        self.word_cards.len() - self.matched_pairs_count()
    }

    pub fn is_board_complete(&self) -> bool {
        !self.word_cards.is_empty() && self.word_cards.iter().all(|c| c.matched)
    }

    /// A word and a meaning are face up and do not match
    pub fn has_pending_mismatch(&self) -> bool {
        self.lock_input && self.selected_word_id.is_some() && self.selected_meaning_id.is_some()
    }
}
